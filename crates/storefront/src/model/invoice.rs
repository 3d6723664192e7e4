use crate::model::{CustomerId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for Invoices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub u32);

impl From<u32> for InvoiceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invoice_{}", self.0)
    }
}

/// Record of a completed purchase. Once stored in the invoice log it never changes.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait. Its
/// creation payload is a [`PurchaseOrder`](crate::model::PurchaseOrder): creating an invoice
/// *is* running the purchase workflow, see [`crate::invoice_actor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub lines: Vec<InvoiceLine>,
    pub total: Decimal,
    pub issued_at: DateTime<Utc>,
}

impl Invoice {
    /// An invoice for `lines` that have not been priced yet.
    pub(crate) fn draft(id: InvoiceId, customer_id: CustomerId, lines: Vec<InvoiceLine>) -> Self {
        Self {
            id,
            customer_id,
            lines,
            total: Decimal::ZERO,
            issued_at: Utc::now(),
        }
    }

    /// Replaces the draft lines with priced ones and stamps the issue time. `total` comes from
    /// [`lines_total`] over the same lines.
    pub(crate) fn issue(&mut self, lines: Vec<InvoiceLine>, total: Decimal) {
        self.total = total;
        self.lines = lines;
        self.issued_at = Utc::now();
    }

    /// Units leaving the warehouse, free units included.
    pub fn units_shipped(&self) -> u64 {
        self.lines.iter().map(InvoiceLine::units_shipped).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub charged_quantity: u32,
    pub free_quantity: u32,
    /// `charged_quantity * unit_price`
    pub line_total: Decimal,
}

impl InvoiceLine {
    /// A line as requested, before the product has been looked up.
    pub(crate) fn requested(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            product_name: String::new(),
            unit_price: Decimal::ZERO,
            charged_quantity: quantity,
            free_quantity: 0,
            line_total: Decimal::ZERO,
        }
    }

    pub fn units_shipped(&self) -> u64 {
        u64::from(self.charged_quantity) + u64::from(self.free_quantity)
    }
}

/// Sum of the line totals, or `None` if it does not fit in a `Decimal`.
pub fn lines_total(lines: &[InvoiceLine]) -> Option<Decimal> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.line_total))
}

const RULE: &str = "--------------------------------------------------------------";

/// Plain-text receipt.
impl Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "INVOICE {} - {}",
            self.id,
            self.issued_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(f, "Customer: {}", self.customer_id)?;
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "{:<24}{:>6}{:>6}{:>13}{:>13}",
            "Item", "Qty", "Free", "Unit Price", "Amount"
        )?;
        writeln!(f, "{}", RULE)?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<24}{:>6}{:>6}{:>13.2}{:>13.2}",
                line.product_name,
                line.charged_quantity,
                line.free_quantity,
                line.unit_price,
                line.line_total
            )?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{:<49}{:>13.2}", "TOTAL", self.total)?;
        write!(f, "{}", RULE)
    }
}
