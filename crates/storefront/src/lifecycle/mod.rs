//! # System Lifecycle
//!
//! Creates the actors, wires them through context injection and shuts them down.
//!
//! Actors are constructed without dependencies and receive them in `run(context)`. Only the
//! invoice actor has any: clones of the product, customer and shop account clients. The
//! dependency graph is acyclic, so dropping every client stops the invoice actor first, which
//! releases its clones and lets the others stop in turn.
//!
//! The shop account is seeded into its actor before it starts, so purchases can be booked from
//! the first request on.
//!
//! ```rust
//! use storefront::lifecycle::ShopSystem;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ShopSystem::new();
//!     // ... use system.products, system.customers, system.invoices, system.accounts
//!     system.shutdown().await.unwrap();
//! }
//! ```

pub mod shop_system;

pub use shop_system::*;
