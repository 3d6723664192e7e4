//! Custom actions for the Product actor.
//!
//! Stock is never edited through `Update`; it moves only through these actions, each of which
//! checks and mutates in one step inside the actor.
//! See [`impl ActorEntity for Product`](crate::model::Product#impl-ActorEntity-for-Product) for
//! the implementation details.

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Removes units from stock for a purchase.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if the amount exceeds the stock, leaving it unchanged.
    ReserveStock(u32),
    /// Puts back units taken by a `ReserveStock` whose purchase did not complete.
    ReleaseStock(u32),
    /// Adds newly delivered units.
    Restock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
///
/// Every variant carries the stock level after the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    CheckStock(u32),
    ReserveStock(u32),
    ReleaseStock(u32),
    Restock(u32),
}
