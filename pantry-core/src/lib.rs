//! Pure computation engine for the pantry app: serving scaling, preference
//! matching, and inventory-waste analytics. No I/O; callers pass in-memory
//! snapshots and render the results.

pub mod error;
pub mod expiry;
pub mod matching;
pub mod scaling;
pub mod types;
pub mod waste;

pub use error::ScaleError;
pub use expiry::{expiry_status, partition_by_status, ExpiryReport, ExpiryStatus};
pub use matching::{
    evaluate, filter, filter_with_stats, matches, FilterStats, MatchOutcome, MissingField,
    RejectReason,
};
pub use scaling::{
    format_amount, parse_target_servings, scale_amount, scale_recipe, ScaledIngredient,
};
pub use types::{
    Ingredient, InventoryItem, PreferenceProfile, Recipe, SkillLevel, SpiceLevel,
    WasteReportRequest,
};
pub use waste::{aggregate, item_waste_value, WasteSummary};
