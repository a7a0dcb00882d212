use thiserror::Error;

/// Structural data-quality failures encountered while scaling.
///
/// These are fatal for the single recipe being scaled; callers surface the
/// error and skip or flag the recipe rather than aborting a batch.
#[derive(Error, Debug, PartialEq)]
pub enum ScaleError {
    #[error("Recipe claims {0} base servings; servings must be positive")]
    InvalidServings(u32),

    #[error("Ingredient '{name}' has a non-finite or negative amount")]
    InvalidAmount { name: String },
}
