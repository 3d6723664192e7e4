use crate::model::{CustomerId, ProductId};
use serde::{Deserialize, Serialize};

/// One product and quantity, as asked for by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl PurchaseRequest {
    pub fn new(customer_id: CustomerId, product_id: ProductId, quantity: u32) -> Self {
        Self {
            customer_id,
            product_id,
            quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A basket checked out as a whole: either every line is invoiced or none is.
///
/// This is the creation payload of the invoice actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub customer_id: CustomerId,
    pub lines: Vec<PurchaseLine>,
}

impl PurchaseOrder {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, product_id: ProductId, quantity: u32) -> Self {
        self.lines.push(PurchaseLine {
            product_id,
            quantity,
        });
        self
    }
}

impl From<PurchaseRequest> for PurchaseOrder {
    fn from(request: PurchaseRequest) -> Self {
        PurchaseOrder::new(request.customer_id).line(request.product_id, request.quantity)
    }
}
