//! Waste analytics over expired inventory.
//!
//! Aggregates a snapshot of expired items into summary figures and estimates
//! the monetary value of each unconsumed remainder. Read-only: marking an
//! item as waste is the inventory collaborator's job; callers re-fetch and
//! re-aggregate after that mutation succeeds.

use serde::{Deserialize, Serialize};

use crate::types::InventoryItem;

/// Summary figures for a set of expired items.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteSummary {
    pub count: usize,
    /// Raw sum of current quantities. Units are NOT normalized across items;
    /// mixing grams with counts is a display-level simplification the caller
    /// accepts.
    pub total_quantity: f64,
    /// Sum of per-item waste values, rounded to 2 decimals for currency
    /// display.
    pub estimated_waste_value: f64,
}

/// Monetary value of an item's unconsumed remainder.
///
/// `price` covers the original full quantity, so the remaining fraction is
/// worth `price * current / original`. Absent pricing or a non-positive
/// original quantity is common, not an error: the item contributes zero.
pub fn item_waste_value(item: &InventoryItem) -> f64 {
    let Some(price) = item.price else {
        return 0.0;
    };
    if item.original_quantity <= 0.0 {
        tracing::debug!(item = %item.name, "priced item has no original quantity, counting as zero");
        return 0.0;
    }
    price * item.current_quantity / item.original_quantity
}

/// Aggregate an expired-item snapshot.
///
/// Pure and idempotent: same snapshot in, same summary out, no mutation of
/// the items.
pub fn aggregate(items: &[InventoryItem]) -> WasteSummary {
    let total_quantity = items.iter().map(|item| item.current_quantity).sum();
    let estimated: f64 = items.iter().map(item_waste_value).sum();
    WasteSummary {
        count: items.len(),
        total_quantity,
        estimated_waste_value: round_currency(estimated),
    }
}

fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
