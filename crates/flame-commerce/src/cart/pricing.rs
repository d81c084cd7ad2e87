//! Cart totals for display.

use crate::ids::{LineItemId, MenuItemId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals and a per-line breakdown of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub total_items: i64,
    /// Number of distinct lines.
    pub unique_items: usize,
    /// Sum of line totals. Taxes and delivery fees are not included.
    pub total_price: Money,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing for one cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    pub line_id: LineItemId,
    pub item_id: MenuItemId,
    pub name: String,
    pub quantity: i64,
    /// Base price plus sides, for one unit.
    pub unit_price: Money,
    pub total: Money,
}
