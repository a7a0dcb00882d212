//! Serving scaling.
//!
//! Linearly resizes a recipe's ingredient amounts from its declared serving
//! count to a caller-chosen target. Nutrition values are per ORIGINAL serving
//! and are deliberately left untouched by scaling.

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::types::Recipe;

/// Smallest target the UI can ask for. Anything below is clamped up.
const MIN_TARGET_SERVINGS: f64 = 1.0;

/// An ingredient amount resized for a target serving count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledIngredient {
    pub name: String,
    /// Scaled amount, rounded to one decimal place.
    pub amount: f64,
    pub unit: String,
}

impl ScaledIngredient {
    /// One-decimal display string, e.g. `"3.0"`. Downstream consumers render
    /// this directly.
    pub fn display_amount(&self) -> String {
        format_amount(self.amount)
    }
}

/// Scale a single base amount from `original_servings` to `target_servings`.
///
/// Result is rounded to one decimal place for display. Targets below one
/// serving are clamped to one. The base amount is assumed finite; batch
/// callers should use [`scale_recipe`], which validates per-ingredient
/// amounts and names the offender.
pub fn scale_amount(
    base: f64,
    original_servings: u32,
    target_servings: f64,
) -> Result<f64, ScaleError> {
    if original_servings == 0 {
        return Err(ScaleError::InvalidServings(original_servings));
    }
    let target = clamp_target(target_servings);
    Ok(round_one_decimal(base * target / f64::from(original_servings)))
}

/// Scale every ingredient of `recipe` to `target_servings`.
///
/// Output preserves ingredient order. Fails for the whole recipe on
/// structural data problems (non-positive declared servings, non-finite or
/// negative ingredient amount); callers flag the recipe and move on rather
/// than aborting a batch.
pub fn scale_recipe(
    recipe: &Recipe,
    target_servings: f64,
) -> Result<Vec<ScaledIngredient>, ScaleError> {
    if recipe.servings == 0 {
        return Err(ScaleError::InvalidServings(recipe.servings));
    }
    let target = clamp_target(target_servings);

    recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
                return Err(ScaleError::InvalidAmount {
                    name: ingredient.name.clone(),
                });
            }
            Ok(ScaledIngredient {
                name: ingredient.name.clone(),
                amount: round_one_decimal(
                    ingredient.amount * target / f64::from(recipe.servings),
                ),
                unit: ingredient.unit.clone(),
            })
        })
        .collect()
}

/// Parse a free-form target-servings entry.
///
/// User input is not guaranteed to be numeric. Unparseable or non-finite
/// input means "no change": the previous valid target is returned. Values
/// below one serving are clamped to one.
pub fn parse_target_servings(input: &str, previous: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => clamp_target(value),
        _ => {
            tracing::debug!(input, previous, "unparseable target servings, keeping previous");
            previous
        }
    }
}

/// Format an amount with one decimal place, e.g. `3.0`.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.1}")
}

fn clamp_target(target: f64) -> f64 {
    if !target.is_finite() || target < MIN_TARGET_SERVINGS {
        tracing::debug!(requested = target, "target servings below minimum, clamping to 1");
        MIN_TARGET_SERVINGS
    } else {
        target
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
