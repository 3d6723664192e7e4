//! # Invoice Actor
//!
//! The append-only invoice log and the purchase workflow that feeds it. A purchase is a
//! `Create` request carrying a [`PurchaseOrder`](crate::model::PurchaseOrder); the actor's
//! context holds the clients of the stores it reads and writes.
//!
//! ```rust,ignore
//! let context = InvoiceContext {
//!     products: product_client.clone(),
//!     customers: customer_client.clone(),
//!     accounts: account_client.clone(),
//!     account: shop_account_id,
//!     promotion: PromotionRule::default(),
//! };
//! tokio::spawn(invoice_actor.run(context));
//! ```
//!
//! See [`entity`] for the workflow steps.

pub mod entity;
pub mod error;

pub use entity::InvoiceAction;
pub use error::*;

use crate::clients::{CustomerClient, ProductClient, ShopAccountClient};
use crate::model::{Invoice, ShopAccountId};
use crate::pricing::PromotionRule;
use actor_framework::{ResourceActor, ResourceClient};

/// Dependencies of the purchase workflow.
#[derive(Clone)]
pub struct InvoiceContext {
    pub products: ProductClient,
    pub customers: CustomerClient,
    pub accounts: ShopAccountClient,
    /// Account that receives the revenue of every purchase.
    pub account: ShopAccountId,
    pub promotion: PromotionRule,
}

/// Creates a new Invoice actor and its client. Wire it with [`InvoiceContext`] when running it.
pub fn new(buffer_size: usize) -> (ResourceActor<Invoice>, ResourceClient<Invoice>) {
    ResourceActor::new(buffer_size)
}
