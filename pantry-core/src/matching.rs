//! Preference matching.
//!
//! Evaluates recipes against a user's preference profile. Matching is a
//! conjunction of independent predicates evaluated with short-circuit: a
//! recipe is kept only if every predicate holds. Filtering preserves input
//! order and never re-ranks.
//!
//! All string comparisons (dietary tags, cuisines, avoided ingredients) are
//! ASCII case-insensitive. Avoided-ingredient matching is exact equality of
//! the trimmed ingredient name, not substring containment.

use serde::{Deserialize, Serialize};

use crate::types::{PreferenceProfile, Recipe};

/// Metadata a recipe lacked when a predicate needed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    SkillLevel,
    TotalTime,
    SpiceLevel,
    Cuisine,
}

/// The first predicate a recipe failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    SkillTooHigh,
    OverTimeBudget,
    TooSpicy,
    DietaryMismatch,
    CuisineNotPreferred,
    AvoidedIngredient,
}

/// Result of evaluating one recipe against a profile.
///
/// `Incomplete` is a data-quality condition, not an error: the recipe is
/// excluded from filtered results but the batch continues, and the condition
/// is counted in [`FilterStats`] for diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    Rejected(RejectReason),
    Incomplete(MissingField),
}

/// Counters for one filtering pass.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FilterStats {
    pub matched: usize,
    pub rejected: usize,
    pub incomplete: usize,
    /// Titles of recipes excluded for missing metadata.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incomplete_titles: Vec<String>,
}

/// Evaluate a single recipe against a profile.
///
/// Predicates, in order: skill ceiling, time budget, spice ceiling, dietary
/// superset, cuisine membership, avoided ingredients. The profile's skill and
/// spice levels are ceilings: a recipe at or below the profile's level
/// passes. The cuisine predicate only consults recipe metadata when the
/// profile actually lists cuisine preferences.
pub fn evaluate(recipe: &Recipe, profile: &PreferenceProfile) -> MatchOutcome {
    let Some(skill) = recipe.skill_level else {
        return MatchOutcome::Incomplete(MissingField::SkillLevel);
    };
    if skill > profile.skill_level {
        return MatchOutcome::Rejected(RejectReason::SkillTooHigh);
    }

    let Some(total_time) = recipe.total_time_minutes else {
        return MatchOutcome::Incomplete(MissingField::TotalTime);
    };
    if total_time > profile.max_cooking_time_minutes {
        return MatchOutcome::Rejected(RejectReason::OverTimeBudget);
    }

    let Some(spice) = recipe.spice_level else {
        return MatchOutcome::Incomplete(MissingField::SpiceLevel);
    };
    if spice > profile.spice_level {
        return MatchOutcome::Rejected(RejectReason::TooSpicy);
    }

    // Every restriction must appear in the recipe's own tag set.
    let satisfies_diet = profile.dietary_restrictions.iter().all(|restriction| {
        recipe
            .dietary_tags
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(restriction))
    });
    if !satisfies_diet {
        return MatchOutcome::Rejected(RejectReason::DietaryMismatch);
    }

    if !profile.cuisine_preferences.is_empty() {
        let Some(cuisine) = recipe.cuisine.as_deref() else {
            return MatchOutcome::Incomplete(MissingField::Cuisine);
        };
        let preferred = profile
            .cuisine_preferences
            .iter()
            .any(|preference| preference.eq_ignore_ascii_case(cuisine));
        if !preferred {
            return MatchOutcome::Rejected(RejectReason::CuisineNotPreferred);
        }
    }

    if recipe
        .ingredients
        .iter()
        .any(|ingredient| ingredient_avoided(&ingredient.name, &profile.avoid_ingredients))
    {
        return MatchOutcome::Rejected(RejectReason::AvoidedIngredient);
    }

    MatchOutcome::Matched
}

/// True only when every predicate holds.
pub fn matches(recipe: &Recipe, profile: &PreferenceProfile) -> bool {
    evaluate(recipe, profile) == MatchOutcome::Matched
}

/// Keep only matching recipes, preserving input order.
pub fn filter(recipes: Vec<Recipe>, profile: &PreferenceProfile) -> Vec<Recipe> {
    filter_with_stats(recipes, profile).0
}

/// Like [`filter`], also reporting per-pass counters.
pub fn filter_with_stats(
    recipes: Vec<Recipe>,
    profile: &PreferenceProfile,
) -> (Vec<Recipe>, FilterStats) {
    let mut stats = FilterStats::default();
    let kept = recipes
        .into_iter()
        .filter(|recipe| match evaluate(recipe, profile) {
            MatchOutcome::Matched => {
                stats.matched += 1;
                true
            }
            MatchOutcome::Rejected(reason) => {
                tracing::debug!(title = %recipe.title, ?reason, "recipe rejected");
                stats.rejected += 1;
                false
            }
            MatchOutcome::Incomplete(field) => {
                tracing::debug!(title = %recipe.title, ?field, "recipe missing metadata");
                stats.incomplete += 1;
                stats.incomplete_titles.push(recipe.title.clone());
                false
            }
        })
        .collect();
    (kept, stats)
}

/// Exact case-insensitive equality of the trimmed ingredient name against
/// the avoid list. Substring containment is intentionally not used.
fn ingredient_avoided(name: &str, avoid_list: &[String]) -> bool {
    let name = name.trim();
    avoid_list
        .iter()
        .any(|avoided| avoided.trim().eq_ignore_ascii_case(name))
}
