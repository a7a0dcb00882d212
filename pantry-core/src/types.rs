use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How demanding a recipe is to execute, and how capable a cook claims to be.
///
/// The declaration order defines the ordinal ladder used for ceiling
/// comparisons: a profile at a given level accepts any recipe at or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

/// Heat ladder for recipes and tolerance profiles.
///
/// Same ceiling semantics as [`SkillLevel`]: declaration order is the
/// comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    Mild,
    Medium,
    Spicy,
    ExtraSpicy,
}

impl SpiceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Spicy => "spicy",
            SpiceLevel::ExtraSpicy => "extra_spicy",
        }
    }
}

/// A single recipe ingredient. `amount` is calibrated to the recipe's
/// declared `servings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// A recipe as supplied by the catalog collaborator.
///
/// Ingredient and instruction order is display order and is preserved
/// everywhere. The matching metadata fields are optional because catalogs are
/// partially populated; recipes missing a field needed by a predicate are
/// excluded from filtered results rather than failing the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Serving count the stored ingredient amounts are calibrated for.
    /// Must be positive for scaling to be meaningful.
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    /// Nutrient name → value, expressed per the ORIGINAL serving size.
    /// Serving scaling never touches these values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub nutrition: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    #[serde(default)]
    pub skill_level: Option<SkillLevel>,
    /// Total time (prep + cook) in minutes.
    #[serde(default)]
    pub total_time_minutes: Option<u32>,
    #[serde(default)]
    pub spice_level: Option<SpiceLevel>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_tags: Vec<String>,
}

/// A user's saved cooking preference profile.
///
/// Fetched and persisted wholesale by an external collaborator; the engine
/// only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceProfile {
    pub skill_level: SkillLevel,
    pub max_cooking_time_minutes: u32,
    pub spice_level: SpiceLevel,
    /// Tags a matching recipe must ALL declare (conjunctive).
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// If non-empty, a matching recipe's cuisine must be one of these.
    #[serde(default)]
    pub cuisine_preferences: Vec<String>,
    /// Ingredient names that exclude a recipe outright.
    #[serde(default)]
    pub avoid_ingredients: Vec<String>,
}

impl Default for PreferenceProfile {
    /// First-use defaults: cautious skill and spice, an hour of cooking time,
    /// no restrictions.
    fn default() -> Self {
        PreferenceProfile {
            skill_level: SkillLevel::Beginner,
            max_cooking_time_minutes: 60,
            spice_level: SpiceLevel::Mild,
            dietary_restrictions: Vec::new(),
            cuisine_preferences: Vec::new(),
            avoid_ingredients: Vec::new(),
        }
    }
}

/// Read-only view of a tracked inventory item, as supplied by the
/// inventory/expiry collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub current_quantity: f64,
    /// Quantity the item was added with; `price` covers this full amount.
    pub original_quantity: f64,
    pub unit_name: String,
    pub expiry_date: NaiveDate,
    pub added_by_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Monetary cost of the original full quantity, if known.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Mutation request handed to the inventory collaborator when the user marks
/// an item as waste. The engine builds this but never executes it; after the
/// collaborator confirms, the caller re-fetches and re-aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteReportRequest {
    pub item_id: Uuid,
    pub quantity: f64,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub reported_by: String,
}
