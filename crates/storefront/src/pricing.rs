//! # Pricing
//!
//! The volume promotion and the arithmetic of a single invoice line. Nothing here touches an
//! actor: the invoice workflow quotes every line first and only then reserves stock.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// "Buy `group_size`, get `free_per_group` free", applied per product line.
///
/// Only complete groups count: with the default 3/1 rule, 2 units earn nothing, 3 earn one
/// free unit and 7 earn two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRule {
    pub group_size: u32,
    pub free_per_group: u32,
}

impl Default for PromotionRule {
    fn default() -> Self {
        Self {
            group_size: 3,
            free_per_group: 1,
        }
    }
}

impl PromotionRule {
    /// Free units earned by buying `quantity`. A zero `group_size` disables the promotion.
    pub fn free_units(&self, quantity: u32) -> u32 {
        if self.group_size == 0 {
            return 0;
        }
        (quantity / self.group_size).saturating_mul(self.free_per_group)
    }

    /// Prices `quantity` units. `None` if the line total does not fit in a `Decimal`.
    pub fn quote(&self, quantity: u32, unit_price: Decimal) -> Option<LineQuote> {
        let line_total = unit_price.checked_mul(Decimal::from(quantity))?;
        Some(LineQuote {
            charged_quantity: quantity,
            free_quantity: self.free_units(quantity),
            line_total,
        })
    }
}

/// Price of one line before it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineQuote {
    pub charged_quantity: u32,
    pub free_quantity: u32,
    /// Free units contribute nothing.
    pub line_total: Decimal,
}

impl LineQuote {
    /// Units that leave stock. Widened so that a large order cannot wrap around.
    pub fn units_removed(&self) -> u64 {
        u64::from(self.charged_quantity) + u64::from(self.free_quantity)
    }
}
