use crate::model::{CustomerId, InvoiceId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for shop accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShopAccountId(pub u32);

impl From<u32> for ShopAccountId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ShopAccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account_{}", self.0)
    }
}

/// The shop's own books: revenue taken from purchases and one sale record per invoice line.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait. Sales are
/// booked through [`ShopAccountAction`](crate::shop_account_actor::ShopAccountAction)s by the
/// purchase workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopAccount {
    pub id: ShopAccountId,
    pub name: String,
    pub revenue: Decimal,
    pub sales: Vec<SaleRecord>,
}

impl ShopAccount {
    /// An account with no revenue and an empty sales ledger.
    pub fn new(id: ShopAccountId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            revenue: Decimal::ZERO,
            sales: Vec::new(),
        }
    }

    /// Sale records booked for `invoice`, in line order.
    pub fn sales_for(&self, invoice: InvoiceId) -> impl Iterator<Item = &SaleRecord> {
        self.sales.iter().filter(move |sale| sale.invoice == invoice)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopAccountCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopAccountUpdate {
    pub name: Option<String>,
}

/// One product line of a committed purchase, as seen from the shop's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub seq: u64,
    pub invoice: InvoiceId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub charged_quantity: u32,
    pub free_quantity: u32,
    pub amount: Decimal,
    pub at: DateTime<Utc>,
}
