//! Error types for the Invoice actor, i.e. the reasons a purchase is rejected.

use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, InvoiceId, ProductId};
use crate::product_actor::ProductError;
use crate::shop_account_actor::ShopAccountError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Why a purchase produced no invoice. Stock and wallets are unchanged in every case.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PurchaseError {
    /// The customer, a product or an invoice does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request is malformed (empty basket, zero quantity) or its amounts are too large to
    /// represent.
    #[error("Invalid purchase request: {0}")]
    InvalidRequest(String),

    /// `requested` counts every unit that would leave stock, free units included.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("Insufficient funds for {customer_id}: required {required}, available {available}")]
    InsufficientFunds {
        customer_id: CustomerId,
        required: Decimal,
        available: Decimal,
    },

    /// Invoices are never edited or removed once issued.
    #[error("Invoice {0} is immutable")]
    ImmutableInvoice(InvoiceId),

    /// A store actor has shut down or dropped the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<String> for PurchaseError {
    fn from(msg: String) -> Self {
        PurchaseError::Unavailable(msg)
    }
}

impl From<ProductError> for PurchaseError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => PurchaseError::NotFound(id),
            ProductError::InsufficientStock {
                product_id,
                requested,
                available,
            } => PurchaseError::InsufficientStock {
                product_id,
                requested: u64::from(requested),
                available,
            },
            ProductError::ActorCommunicationError(msg) => PurchaseError::Unavailable(msg),
            other @ (ProductError::InvalidQuantity(_)
            | ProductError::InvalidPrice(_)
            | ProductError::Validation(_)) => PurchaseError::InvalidRequest(other.to_string()),
        }
    }
}

impl From<CustomerError> for PurchaseError {
    fn from(e: CustomerError) -> Self {
        match e {
            CustomerError::NotFound(id) => PurchaseError::NotFound(id),
            CustomerError::InsufficientFunds {
                customer_id,
                required,
                available,
            } => PurchaseError::InsufficientFunds {
                customer_id,
                required,
                available,
            },
            CustomerError::ActorCommunicationError(msg) => PurchaseError::Unavailable(msg),
            other @ (CustomerError::InvalidAmount(_) | CustomerError::Validation(_)) => {
                PurchaseError::InvalidRequest(other.to_string())
            }
        }
    }
}

impl From<ShopAccountError> for PurchaseError {
    fn from(e: ShopAccountError) -> Self {
        match e {
            ShopAccountError::NotFound(id) => PurchaseError::NotFound(id),
            ShopAccountError::ActorCommunicationError(msg) => PurchaseError::Unavailable(msg),
            other @ (ShopAccountError::DuplicateSale(_)
            | ShopAccountError::UnknownSale(_)
            | ShopAccountError::RevenueOverflow(_)
            | ShopAccountError::Validation(_)) => PurchaseError::InvalidRequest(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn collaborator_rejections_keep_their_kind() {
        let stock: PurchaseError = ProductError::InsufficientStock {
            product_id: ProductId(2),
            requested: 4,
            available: 3,
        }
        .into();
        assert_eq!(
            stock,
            PurchaseError::InsufficientStock {
                product_id: ProductId(2),
                requested: 4,
                available: 3
            }
        );

        let funds: PurchaseError = CustomerError::InsufficientFunds {
            customer_id: CustomerId(1),
            required: dec!(30),
            available: dec!(5),
        }
        .into();
        assert!(matches!(funds, PurchaseError::InsufficientFunds { .. }));

        let missing: PurchaseError = CustomerError::NotFound("customer_9".into()).into();
        assert_eq!(missing, PurchaseError::NotFound("customer_9".into()));
    }

    #[test]
    fn communication_failures_become_unavailable() {
        let err: PurchaseError = ProductError::ActorCommunicationError("Actor closed".into()).into();
        assert_eq!(err, PurchaseError::Unavailable("Actor closed".into()));

        let err: PurchaseError =
            ShopAccountError::ActorCommunicationError("Actor closed".into()).into();
        assert_eq!(err, PurchaseError::Unavailable("Actor closed".into()));
    }

    #[test]
    fn revenue_overflow_rejects_the_request() {
        let err: PurchaseError = ShopAccountError::RevenueOverflow(InvoiceId(2)).into();
        assert_eq!(
            err,
            PurchaseError::InvalidRequest("Revenue overflow while booking invoice_2".into())
        );
    }
}
