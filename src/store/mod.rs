//! The recipe catalog.
//!
//! A [`RecipeStore`] is built once from a static catalog definition and is
//! read-only afterwards, except for [`RecipeStore::sort`] which reorders the
//! recipes by name. Records are validated on the way in: identifiers must be
//! unique, names non-empty, and nutrition entries well formed.

use crate::model::{Nutrition, Recipe};
use indexmap::IndexMap;
use log::{debug, warn};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

mod collate;
mod model;

pub use collate::compare_names;
pub use model::{CatalogFormat, LoadOptions, NutritionDefect, NutritionPolicy, ValidationIssue};

const BUILTIN_CATALOG: &str = include_str!("../../data/recipes.json");

/// Errors that can occur when loading a catalog.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Catalog contains no recipes")]
    Empty,

    #[error("Recipe has an empty id")]
    EmptyId,

    #[error("Recipe id is used more than once: {0}")]
    DuplicateId(String),

    #[error("Recipe {id} has an empty name")]
    EmptyName { id: String },

    #[error("Recipe {recipe_id} has a malformed nutrition entry {key:?}: {defect}")]
    MalformedNutrition {
        recipe_id: String,
        key: String,
        defect: NutritionDefect,
    },
}

/// Owns the recipe collection and its current ordering.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    issues: Vec<ValidationIssue>,
    sorted: bool,
}

impl RecipeStore {
    /// Loads the catalog bundled with the crate.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json(BUILTIN_CATALOG, &LoadOptions::default())
    }

    /// Loads a catalog given as a JSON array of recipes.
    pub fn from_json(source: &str, options: &LoadOptions) -> Result<Self, LoadError> {
        Self::load(source, CatalogFormat::Json, options)
    }

    /// Loads a catalog given as a YAML sequence of recipes.
    pub fn from_yaml(source: &str, options: &LoadOptions) -> Result<Self, LoadError> {
        Self::load(source, CatalogFormat::Yaml, options)
    }

    /// Loads a catalog in the given format.
    ///
    /// Fields other than `id` and `name` may be missing or `null`; they load
    /// as empty. Malformed nutrition entries are handled according to
    /// `options.nutrition_policy`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be parsed, holds no
    /// recipes, or breaks an identity rule (empty id, duplicate id, empty
    /// name).
    pub fn load(
        source: &str,
        format: CatalogFormat,
        options: &LoadOptions,
    ) -> Result<Self, LoadError> {
        let raw: Vec<RawRecipe> = match format {
            CatalogFormat::Json => serde_json::from_str(source)?,
            CatalogFormat::Yaml => serde_yaml::from_str(source)?,
        };
        Self::validate(raw, options)
    }

    /// Builds a store from records constructed in code.
    ///
    /// The same validation as [`RecipeStore::load`] applies.
    pub fn from_recipes(recipes: Vec<Recipe>, options: &LoadOptions) -> Result<Self, LoadError> {
        Self::validate(recipes.into_iter().map(RawRecipe::from).collect(), options)
    }

    fn validate(raw: Vec<RawRecipe>, options: &LoadOptions) -> Result<Self, LoadError> {
        if raw.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        let mut recipes = Vec::with_capacity(raw.len());

        for record in raw {
            if record.id.trim().is_empty() {
                return Err(LoadError::EmptyId);
            }
            if record.name.trim().is_empty() {
                return Err(LoadError::EmptyName { id: record.id });
            }
            if !seen.insert(record.id.clone()) {
                return Err(LoadError::DuplicateId(record.id));
            }
            recipes.push(record.into_recipe(options.nutrition_policy, &mut issues)?);
        }

        debug!(
            "Loaded {} recipes ({} nutrition entries dropped)",
            recipes.len(),
            issues.len()
        );

        Ok(RecipeStore {
            recipes,
            issues,
            sorted: false,
        })
    }

    /// Orders the recipes by name.
    ///
    /// The sort is stable: recipes whose names compare equal keep their
    /// relative order. Sorting an already sorted store changes nothing.
    pub fn sort(&mut self) {
        self.recipes.sort_by(|a, b| compare_names(&a.name, &b.name));
        self.sorted = true;
        debug!("Sorted {} recipes by name", self.recipes.len());
    }

    /// Finds a recipe by id. Returns `None` if no recipe has that id.
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Recipes in their current order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Ids in their current order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.recipes.iter().map(|recipe| recipe.id.as_str())
    }

    /// Nutrition entries dropped while loading.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// A catalog record as written, before validation.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    id: String,
    name: String,
    #[serde(default)]
    ingredients: Option<Vec<String>>,
    #[serde(default)]
    flavorings: Option<Vec<String>>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    nutrition: Option<IndexMap<String, RawAmount>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Amount(Option<f64>),
    Other(serde_json::Value),
}

impl From<Recipe> for RawRecipe {
    fn from(recipe: Recipe) -> Self {
        RawRecipe {
            id: recipe.id,
            name: recipe.name,
            ingredients: Some(recipe.ingredients),
            flavorings: Some(recipe.flavorings),
            description: recipe.description,
            nutrition: Some(
                recipe
                    .nutrition
                    .iter()
                    .map(|(key, amount)| (key.to_string(), RawAmount::Amount(amount)))
                    .collect(),
            ),
        }
    }
}

impl RawRecipe {
    fn into_recipe(
        self,
        policy: NutritionPolicy,
        issues: &mut Vec<ValidationIssue>,
    ) -> Result<Recipe, LoadError> {
        let mut nutrition = Nutrition::new();

        for (key, amount) in self.nutrition.unwrap_or_default() {
            match check_entry(&key, &amount) {
                Ok(amount) => nutrition.insert(key, amount),
                Err(defect) => match policy {
                    NutritionPolicy::Strict => {
                        return Err(LoadError::MalformedNutrition {
                            recipe_id: self.id,
                            key,
                            defect,
                        })
                    }
                    NutritionPolicy::Lenient => {
                        warn!(
                            "Dropping nutrition entry {:?} of recipe {}: {}",
                            key, self.id, defect
                        );
                        issues.push(ValidationIssue {
                            recipe_id: self.id.clone(),
                            key,
                            defect,
                        });
                    }
                },
            }
        }

        Ok(Recipe {
            id: self.id,
            name: self.name,
            ingredients: self.ingredients.unwrap_or_default(),
            flavorings: self.flavorings.unwrap_or_default(),
            description: self.description,
            nutrition,
        })
    }
}

fn nutrient_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9]*(?:_[a-z0-9]+)*$").unwrap())
}

fn check_entry(key: &str, amount: &RawAmount) -> Result<Option<f64>, NutritionDefect> {
    if !nutrient_key_pattern().is_match(key) {
        return Err(NutritionDefect::InvalidKey);
    }
    match amount {
        RawAmount::Amount(Some(value)) if !value.is_finite() => Err(NutritionDefect::NonFinite),
        RawAmount::Amount(value) => Ok(*value),
        RawAmount::Other(value) => Err(NutritionDefect::NotANumber(value.to_string())),
    }
}
