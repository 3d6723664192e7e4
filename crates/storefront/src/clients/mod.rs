//! Typed clients, one per actor. Each wraps a `ResourceClient` and implements
//! [`ActorClient`](actor_framework::ActorClient) for the shared `get`, `list` and `delete`.

pub mod customer_client;
pub mod invoice_client;
pub mod product_client;
pub mod shop_account_client;

pub use customer_client::CustomerClient;
pub use invoice_client::InvoiceClient;
pub use product_client::ProductClient;
pub use shop_account_client::ShopAccountClient;
