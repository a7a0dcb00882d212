//! Expiry classification.
//!
//! Buckets inventory items by how close they are to their expiry date. The
//! reference date is always caller-supplied so classification stays pure and
//! reproducible; nothing here reads the clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::InventoryItem;

/// Items expiring within this many days count as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Fresh,
    ExpiringSoon,
    Expired,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Fresh => "fresh",
            ExpiryStatus::ExpiringSoon => "expiring_soon",
            ExpiryStatus::Expired => "expired",
        }
    }
}

/// Items bucketed by expiry status, each bucket in input order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExpiryReport {
    pub fresh: Vec<InventoryItem>,
    pub expiring_soon: Vec<InventoryItem>,
    pub expired: Vec<InventoryItem>,
}

/// Classify a single item relative to `on`.
///
/// An item expiring ON the reference date is still usable and reports as
/// `ExpiringSoon`; only strictly-past dates are `Expired`.
pub fn expiry_status(item: &InventoryItem, on: NaiveDate) -> ExpiryStatus {
    let days_left = (item.expiry_date - on).num_days();
    if days_left < 0 {
        ExpiryStatus::Expired
    } else if days_left <= EXPIRING_SOON_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Fresh
    }
}

/// Bucket a snapshot of items by expiry status.
///
/// The `expired` bucket is what the caller feeds into waste aggregation; the
/// `expiring_soon` bucket drives the alert panel.
pub fn partition_by_status(items: Vec<InventoryItem>, on: NaiveDate) -> ExpiryReport {
    let mut report = ExpiryReport::default();
    for item in items {
        match expiry_status(&item, on) {
            ExpiryStatus::Fresh => report.fresh.push(item),
            ExpiryStatus::ExpiringSoon => report.expiring_soon.push(item),
            ExpiryStatus::Expired => report.expired.push(item),
        }
    }
    report
}
