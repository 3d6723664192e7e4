//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource actors on Tokio. Each resource type
//! (customers, products, invoices, …) lives in its own actor that exclusively owns its records
//! and processes requests one at a time; the rest of the program talks to it through a cheap,
//! cloneable client.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the business rules of one resource type.
//! 2. **Runtime** ([`ResourceActor`]): the message loop, the store and ID generation.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed request/response calls.
//!
//! ## Requests
//!
//! Every actor answers the same [`ResourceRequest`] set: `Create`, `Get`, `List`, `Update`,
//! `Delete`, plus `Action` for operations that are not CRUD (reserve stock, charge a wallet).
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to the constructor, so actors can be
//! created first and wired afterwards. An actor whose hooks call other actors takes their
//! clients as its `Context`:
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32, stock: u32 }
//! #[derive(Debug)] struct ItemCreate { stock: u32 }
//! #[derive(Debug)] enum ItemAction { Take(u32) }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum ItemError {
//!     #[error("only {0} left")]
//!     Short(u32),
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = (); type Action = ItemAction;
//!     type ActionResult = u32; type Context = (); type Error = ItemError;
//!     fn from_create_params(id: u32, p: ItemCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, stock: p.stock })
//!     }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: ItemAction, _: &()) -> Result<u32, Self::Error> {
//!         let ItemAction::Take(n) = a;
//!         if n > self.stock {
//!             return Err(ItemError::Short(self.stock));
//!         }
//!         self.stock -= n;
//!         Ok(self.stock)
//!     }
//! }
//!
//! #[derive(Clone, Debug)] struct Pick { id: u32, item: u32, qty: u32 }
//! #[derive(Debug)] struct PickCreate { item: u32, qty: u32 }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum PickError {
//!     #[error("rejected: {0}")]
//!     Rejected(String),
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Pick {
//!     type Id = u32; type Create = PickCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Context = ResourceClient<Item>; type Error = PickError;
//!     fn from_create_params(id: u32, p: PickCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, item: p.item, qty: p.qty })
//!     }
//!     // Runs inside the Pick actor's loop: picks are serialized.
//!     async fn on_create(&mut self, items: &ResourceClient<Item>) -> Result<(), Self::Error> {
//!         items
//!             .perform_action(self.item, ItemAction::Take(self.qty))
//!             .await
//!             .map(|_| ())
//!             .map_err(|e: FrameworkError| PickError::Rejected(e.to_string()))
//!     }
//!     async fn on_update(&mut self, _: (), _: &ResourceClient<Item>) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &ResourceClient<Item>) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (item_actor, items) = ResourceActor::<Item>::new(10);
//!     let (pick_actor, picks) = ResourceActor::<Pick>::new(10);
//!     tokio::spawn(item_actor.run(()));
//!     tokio::spawn(pick_actor.run(items.clone()));
//!
//!     let item = items.create(ItemCreate { stock: 3 }).await.unwrap();
//!     assert!(picks.create(PickCreate { item, qty: 2 }).await.is_ok());
//!     assert!(picks.create(PickCreate { item, qty: 2 }).await.is_err());
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task; actors run in parallel.
//! - Within an actor, requests are handled sequentially and every hook is awaited before the
//!   next request, so a hook that checks and then mutates cannot interleave with another request
//!   to the same actor.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a client's requests from scripted expectations, so an actor can
//! be tested against mocked dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
