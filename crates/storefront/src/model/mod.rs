//! Domain types shared by the actors and their clients.

pub mod account;
pub mod customer;
pub mod invoice;
pub mod product;
pub mod purchase;

pub use account::*;
pub use customer::*;
pub use invoice::*;
pub use product::*;
pub use purchase::*;
