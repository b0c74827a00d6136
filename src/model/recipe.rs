use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single Milk Depot recipe.
///
/// Base ingredients go into the machine first, flavorings are the optional
/// second phase. Every field other than `id` and `name` may be empty; the
/// detail view substitutes its own fallback text for missing content.
///
/// # Examples
///
/// ```
/// use milk_depot::{Nutrition, Recipe};
///
/// let recipe = Recipe {
///     id: "oat001".to_string(),
///     name: "Simple Oat".to_string(),
///     ingredients: vec!["1/2 cup Rolled Oats".to_string()],
///     flavorings: Vec::new(),
///     description: None,
///     nutrition: Nutrition::from_iter([("calories", Some(60.0))]),
/// };
/// assert_eq!(recipe.nutrition.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, unique within a catalog
    pub id: String,
    /// Display name, also the sort key
    pub name: String,
    /// Base ingredients in the order they are listed
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Optional flavorings added after the base
    #[serde(default)]
    pub flavorings: Vec<String>,
    /// Free text; `\n` marks a line break
    #[serde(default)]
    pub description: Option<String>,
    /// Estimated nutrition, in display order
    #[serde(default)]
    pub nutrition: Nutrition,
}

/// Estimated nutrition table of a recipe.
///
/// Keys encode their unit as a suffix (`protein_g`, `calcium_mg`,
/// `vitamin_d_iu`, `folate_mcg`) or are the literal `calories`. Insertion
/// order is kept and is the order rows are displayed in. A `None` amount
/// means the nutrient is listed but has no estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nutrition {
    entries: IndexMap<String, Option<f64>>,
}

impl Nutrition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a nutrient, keeping the position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, amount: Option<f64>) {
        self.entries.insert(key.into(), amount);
    }

    /// Returns the amount for `key`; `Some(None)` for a listed nutrient
    /// without an estimate.
    pub fn get(&self, key: &str) -> Option<Option<f64>> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, amount)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.entries.iter().map(|(key, amount)| (key.as_str(), *amount))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<f64>)> for Nutrition {
    fn from_iter<I: IntoIterator<Item = (K, Option<f64>)>>(iter: I) -> Self {
        Nutrition {
            entries: iter
                .into_iter()
                .map(|(key, amount)| (key.into(), amount))
                .collect(),
        }
    }
}
