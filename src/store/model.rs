use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serialization format of a recipe catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    Json,
    Yaml,
}

/// What to do with a nutrition entry that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutritionPolicy {
    /// Drop the entry and record a [`ValidationIssue`]
    #[default]
    Lenient,
    /// Reject the whole catalog
    Strict,
}

/// Options applied while loading a catalog.
///
/// ```
/// use milk_depot::{LoadOptions, NutritionPolicy};
///
/// let options: LoadOptions = serde_json::from_str(r#"{ "nutrition_policy": "strict" }"#)?;
/// assert_eq!(options.nutrition_policy, NutritionPolicy::Strict);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub nutrition_policy: NutritionPolicy,
}

/// Why a nutrition entry was not accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NutritionDefect {
    #[error("key is not a snake_case nutrient name")]
    InvalidKey,

    #[error("amount is not a number: {0}")]
    NotANumber(String),

    #[error("amount is not finite")]
    NonFinite,
}

/// A nutrition entry dropped while loading under [`NutritionPolicy::Lenient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub recipe_id: String,
    pub key: String,
    pub defect: NutritionDefect,
}
