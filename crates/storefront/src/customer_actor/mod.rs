//! # Customer Actor
//!
//! Customers and their stored-value wallets. The purchase workflow debits a wallet with
//! [`CustomerAction::ChargePurchase`], which checks the balance and debits it in one step.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`actions`] - [`CustomerAction`] and [`CustomerActionResult`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Customer;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
