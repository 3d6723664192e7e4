//! # Storefront
//!
//! Purchase engine for a small shop built on `actor_framework`. Products, customers and
//! invoices each live in their own actor; buying something is a request to the invoice actor,
//! which validates the purchase, applies the volume promotion, takes the units out of stock,
//! books the sale to the shop's account, debits the customer's wallet and records the invoice,
//! or changes nothing at all.
//!
//! - [`model`]: domain types
//! - [`pricing`]: the promotion and line arithmetic
//! - [`product_actor`], [`customer_actor`], [`invoice_actor`], [`shop_account_actor`]: entity
//!   implementations
//! - [`clients`]: typed clients for each actor
//! - [`lifecycle`]: [`ShopSystem`](lifecycle::ShopSystem), which starts and stops everything
//! - [`config`]: environment configuration
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront::lifecycle::ShopSystem;
//! use storefront::model::{CustomerCreate, ProductCreate, PurchaseRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = ShopSystem::new();
//!
//!     let soap = system
//!         .products
//!         .create_product(ProductCreate {
//!             name: "Soap".into(),
//!             unit_price: Decimal::new(1000, 2),
//!             stock: 10,
//!         })
//!         .await?;
//!     let alice = system
//!         .customers
//!         .create_customer(CustomerCreate {
//!             name: "Alice".into(),
//!             email: "alice@example.com".into(),
//!             opening_balance: Decimal::new(100, 0),
//!         })
//!         .await?;
//!
//!     // Buy 3, get 1 free
//!     let invoice = system
//!         .invoices
//!         .purchase(PurchaseRequest::new(alice, soap, 3))
//!         .await?;
//!     assert_eq!(invoice.total, Decimal::new(3000, 2));
//!     assert_eq!(invoice.lines[0].free_quantity, 1);
//!     assert_eq!(system.products.check_stock(soap).await?, 6);
//!     assert_eq!(system.revenue().await?, Decimal::new(3000, 2));
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod invoice_actor;
pub mod lifecycle;
pub mod model;
pub mod pricing;
pub mod product_actor;
pub mod shop_account_actor;
