//! Error types for the Customer actor.

use crate::model::CustomerId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during customer and wallet operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// An amount that is not positive where it must be, or that the wallet cannot hold.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// The wallet cannot cover the amount.
    #[error("Insufficient funds for {customer_id}: required {required}, available {available}")]
    InsufficientFunds {
        customer_id: CustomerId,
        required: Decimal,
        available: Decimal,
    },

    /// The customer data provided is invalid.
    #[error("Customer validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CustomerError {
    fn from(msg: String) -> Self {
        CustomerError::ActorCommunicationError(msg)
    }
}
