//! # Shop Account Actor
//!
//! The shop's revenue and its sales ledger. The purchase workflow books every committed
//! purchase here with [`ShopAccountAction::RecordSale`] and takes it back with
//! [`ShopAccountAction::ReverseSale`] if the customer cannot be charged.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`ShopAccount`]
//! - [`error`] - [`ShopAccountError`]
//! - [`actions`] - [`ShopAccountAction`] and [`ShopAccountActionResult`]
//!
//! [`ShopSystem`](crate::lifecycle::ShopSystem) seeds one account before the actor starts, so
//! the workflow always has somewhere to book sales.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::ShopAccount;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new shop account actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ShopAccount>, ResourceClient<ShopAccount>) {
    ResourceActor::new(buffer_size)
}
