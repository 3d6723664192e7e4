//! Bookkeeping actions for the shop account.

use crate::model::{CustomerId, InvoiceId, InvoiceLine};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum ShopAccountAction {
    /// Reads the revenue booked so far.
    Revenue,
    /// Adds the invoice total to revenue and appends one sale record per line.
    ///
    /// # Errors
    /// `DuplicateSale` if the invoice is already booked, `RevenueOverflow` if the new revenue
    /// does not fit in a `Decimal`. Nothing is booked in either case.
    RecordSale(Sale),
    /// Removes every record of the invoice and takes its amount back out of revenue.
    ReverseSale(InvoiceId),
}

/// A priced purchase handed over for booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub invoice: InvoiceId,
    pub customer_id: CustomerId,
    pub lines: Vec<InvoiceLine>,
}

/// Results from ShopAccountActions. Each carries the revenue after the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAccountActionResult {
    Revenue(Decimal),
    RecordSale(Decimal),
    ReverseSale(Decimal),
}
