//! Error types for the shop account actor.

use crate::model::InvoiceId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopAccountError {
    #[error("Shop account not found: {0}")]
    NotFound(String),

    /// The invoice has already been booked.
    #[error("Sale for {0} is already recorded")]
    DuplicateSale(InvoiceId),

    /// Nothing is booked for the invoice.
    #[error("No sale recorded for {0}")]
    UnknownSale(InvoiceId),

    /// Booking the invoice would push revenue past the largest `Decimal`.
    #[error("Revenue overflow while booking {0}")]
    RevenueOverflow(InvoiceId),

    #[error("Shop account validation error: {0}")]
    Validation(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ShopAccountError {
    fn from(msg: String) -> Self {
        ShopAccountError::ActorCommunicationError(msg)
    }
}
