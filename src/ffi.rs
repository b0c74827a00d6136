//! UniFFI bindings for cross-platform hosts (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! A host constructs one [`FfiRecipeBook`], forwards its two navigation
//! events to it and draws the returned view-models.

use crate::model::{resolve, NutrientLabel};
use crate::state::{Controller, RenderSink, ViewState};
use crate::store::{
    CatalogFormat, LoadError, LoadOptions, NutritionPolicy, RecipeStore, ValidationIssue,
};
use crate::view::{
    Alignment, DetailView, ListEntry, ListView, NutritionRow, TextSegment, TextStyle, ViewError,
};
use std::sync::{Arc, Mutex, MutexGuard};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum MilkDepotError {
    #[error("Recipe not found: {message}")]
    NotFound { message: String },
}

impl From<ViewError> for MilkDepotError {
    fn from(e: ViewError) -> Self {
        match e {
            ViewError::RecipeNotFound(id) => MilkDepotError::NotFound { message: id },
        }
    }
}

/// One entry of the recipe list.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiListEntry {
    Recipe { name: String, id: String },
    Placeholder { message: String },
}

impl From<&ListEntry> for FfiListEntry {
    fn from(entry: &ListEntry) -> Self {
        match entry {
            ListEntry::Recipe { name, id } => FfiListEntry::Recipe {
                name: name.clone(),
                id: id.clone(),
            },
            ListEntry::Placeholder { message } => FfiListEntry::Placeholder {
                message: message.clone(),
            },
        }
    }
}

fn list_entries(view: &ListView) -> Vec<FfiListEntry> {
    view.entries.iter().map(FfiListEntry::from).collect()
}

#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiTextSegment {
    Text { text: String },
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiNutritionRow {
    Nutrient {
        label: String,
        amount: String,
    },
    /// A single cell spanning `column_span` columns
    Placeholder {
        text: String,
        column_span: u8,
        centered: bool,
        informational: bool,
    },
}

/// FFI-safe representation of the detail screen.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiDetailView {
    pub header: String,
    pub ingredients: Vec<String>,
    /// Shared by the flavorings heading and its list
    pub flavorings_visible: bool,
    pub flavorings: Vec<String>,
    pub description: Vec<FfiTextSegment>,
    pub nutrition: Vec<FfiNutritionRow>,
}

impl From<&DetailView> for FfiDetailView {
    fn from(view: &DetailView) -> Self {
        FfiDetailView {
            header: view.header.clone(),
            ingredients: view.ingredients.clone(),
            flavorings_visible: view.flavorings.visible,
            flavorings: view.flavorings.lines.clone(),
            description: view
                .description
                .iter()
                .map(|segment| match segment {
                    TextSegment::Text(text) => FfiTextSegment::Text { text: text.clone() },
                    TextSegment::LineBreak => FfiTextSegment::LineBreak,
                })
                .collect(),
            nutrition: view
                .nutrition
                .rows
                .iter()
                .map(|row| match row {
                    NutritionRow::Nutrient { label, amount } => FfiNutritionRow::Nutrient {
                        label: label.clone(),
                        amount: amount.clone(),
                    },
                    NutritionRow::Placeholder(cell) => FfiNutritionRow::Placeholder {
                        text: cell.text.clone(),
                        column_span: cell.column_span,
                        centered: cell.alignment == Alignment::Center,
                        informational: cell.style == TextStyle::Informational,
                    },
                })
                .collect(),
        }
    }
}

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiScreen {
    List,
    Detail { recipe_id: String },
}

impl From<&ViewState> for FfiScreen {
    fn from(state: &ViewState) -> Self {
        match state {
            ViewState::ListScreen => FfiScreen::List,
            ViewState::DetailScreen(id) => FfiScreen::Detail {
                recipe_id: id.clone(),
            },
        }
    }
}

/// A nutrition entry dropped while loading the catalog.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiValidationIssue {
    pub recipe_id: String,
    pub key: String,
    pub reason: String,
}

impl From<&ValidationIssue> for FfiValidationIssue {
    fn from(issue: &ValidationIssue) -> Self {
        FfiValidationIssue {
            recipe_id: issue.recipe_id.clone(),
            key: issue.key.clone(),
            reason: issue.defect.to_string(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNutrientLabel {
    pub label: String,
    pub amount: String,
}

impl From<NutrientLabel> for FfiNutrientLabel {
    fn from(resolved: NutrientLabel) -> Self {
        FfiNutrientLabel {
            label: resolved.label,
            amount: resolved.amount,
        }
    }
}

/// Keeps the last views handed over by the controller until the host asks
/// for them.
#[derive(Debug, Default)]
struct HostSink {
    list: Option<ListView>,
    detail: Option<DetailView>,
    viewport_reset_pending: bool,
}

impl RenderSink for HostSink {
    fn show_list(&mut self, view: &ListView) {
        self.list = Some(view.clone());
    }

    fn show_detail(&mut self, view: &DetailView) {
        self.detail = Some(view.clone());
    }

    fn reset_viewport(&mut self) {
        self.viewport_reset_pending = true;
    }
}

/// A recipe catalog together with its navigation state.
///
/// A catalog that fails to load does not fail construction: the list then
/// shows the unavailable-data placeholder and [`FfiRecipeBook::load_error`]
/// tells why.
#[derive(uniffi::Object)]
pub struct FfiRecipeBook {
    controller: Mutex<Controller<HostSink>>,
    load_error: Option<String>,
}

#[uniffi::export]
impl FfiRecipeBook {
    /// Opens the catalog bundled with the library.
    #[uniffi::constructor]
    pub fn builtin() -> Arc<Self> {
        Self::open(RecipeStore::builtin())
    }

    /// Opens a catalog from JSON text.
    #[uniffi::constructor]
    pub fn from_json(source: String, strict: bool) -> Arc<Self> {
        Self::open(RecipeStore::load(
            &source,
            CatalogFormat::Json,
            &load_options(strict),
        ))
    }

    /// Opens a catalog from YAML text.
    #[uniffi::constructor]
    pub fn from_yaml(source: String, strict: bool) -> Arc<Self> {
        Self::open(RecipeStore::load(
            &source,
            CatalogFormat::Yaml,
            &load_options(strict),
        ))
    }

    /// Why the catalog is unavailable, if it is.
    pub fn load_error(&self) -> Option<String> {
        self.load_error.clone()
    }

    /// Nutrition entries dropped while loading.
    pub fn issues(&self) -> Vec<FfiValidationIssue> {
        self.lock()
            .store()
            .map(|store| store.issues().iter().map(FfiValidationIssue::from).collect())
            .unwrap_or_default()
    }

    /// Returns the recipe list, sorted by name.
    pub fn list_view(&self) -> Vec<FfiListEntry> {
        let controller = self.lock();
        match &controller.sink().list {
            Some(view) => list_entries(view),
            None => Vec::new(),
        }
    }

    /// Shows the recipe with `id` and returns its detail view.
    pub fn select_recipe(&self, id: String) -> Result<FfiDetailView, MilkDepotError> {
        let mut controller = self.lock();
        controller.select_recipe(&id)?;
        controller
            .sink()
            .detail
            .as_ref()
            .map(FfiDetailView::from)
            .ok_or(MilkDepotError::NotFound { message: id })
    }

    /// Returns to the list screen.
    pub fn go_home(&self) -> Vec<FfiListEntry> {
        let mut controller = self.lock();
        controller.go_home();
        match &controller.sink().list {
            Some(view) => list_entries(view),
            None => Vec::new(),
        }
    }

    pub fn current_screen(&self) -> FfiScreen {
        FfiScreen::from(self.lock().state())
    }

    /// Detail view of the recipe on screen, if the detail screen is shown.
    pub fn detail_view(&self) -> Option<FfiDetailView> {
        let controller = self.lock();
        match controller.state() {
            ViewState::DetailScreen(_) => {
                controller.sink().detail.as_ref().map(FfiDetailView::from)
            }
            ViewState::ListScreen => None,
        }
    }

    /// Returns true once after each switch to a detail screen; the host
    /// scrolls to the top when it does.
    pub fn take_viewport_reset(&self) -> bool {
        let mut controller = self.lock();
        std::mem::take(&mut controller.sink_mut().viewport_reset_pending)
    }
}

impl FfiRecipeBook {
    fn open(loaded: Result<RecipeStore, LoadError>) -> Arc<Self> {
        let load_error = loaded.as_ref().err().map(|e| e.to_string());
        let mut controller = Controller::from_load(loaded, HostSink::default());
        controller.start();
        Arc::new(FfiRecipeBook {
            controller: Mutex::new(controller),
            load_error,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Controller<HostSink>> {
        self.controller
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn load_options(strict: bool) -> LoadOptions {
    LoadOptions {
        nutrition_policy: if strict {
            NutritionPolicy::Strict
        } else {
            NutritionPolicy::Lenient
        },
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Resolves the display label and formatted amount of a nutrition entry.
///
/// # Arguments
/// * `key` - Nutrition key, e.g. `saturated_fat_g`
/// * `amount` - Estimated amount, if any
#[uniffi::export]
pub fn resolve_nutrient(key: String, amount: Option<f64>) -> FfiNutrientLabel {
    resolve(&key, amount).into()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{NO_NUTRITION, RECIPES_UNAVAILABLE};
    use indoc::indoc;

    fn catalog() -> String {
        indoc! {r#"
            [
              {
                "id": "oat001",
                "name": "Simple Oat",
                "description": "Creamy.\nNut free.",
                "nutrition": { "saturated_fat_g": 5, "bogus": "oops" }
              },
              { "id": "almond001", "name": "Classic Creamy Almond" }
            ]"#}
        .to_string()
    }

    #[test]
    fn test_book_lists_sorted_recipes() {
        let book = FfiRecipeBook::from_json(catalog(), false);
        assert!(book.load_error().is_none());
        assert_eq!(
            book.list_view(),
            vec![
                FfiListEntry::Recipe {
                    name: "Classic Creamy Almond".to_string(),
                    id: "almond001".to_string()
                },
                FfiListEntry::Recipe {
                    name: "Simple Oat".to_string(),
                    id: "oat001".to_string()
                },
            ]
        );
        assert_eq!(book.issues().len(), 1);
        assert_eq!(book.issues()[0].key, "bogus");
    }

    #[test]
    fn test_book_navigation() {
        let book = FfiRecipeBook::from_json(catalog(), false);
        assert_eq!(book.current_screen(), FfiScreen::List);
        assert!(!book.take_viewport_reset());

        let detail = book.select_recipe("oat001".to_string()).unwrap();
        assert_eq!(detail.header, "Simple Oat");
        assert!(!detail.flavorings_visible);
        assert_eq!(
            detail.description,
            vec![
                FfiTextSegment::Text {
                    text: "Creamy.".to_string()
                },
                FfiTextSegment::LineBreak,
                FfiTextSegment::Text {
                    text: "Nut free.".to_string()
                },
            ]
        );
        assert_eq!(
            detail.nutrition,
            vec![FfiNutritionRow::Nutrient {
                label: "Saturated fat".to_string(),
                amount: "5 g".to_string()
            }]
        );
        assert_eq!(
            book.current_screen(),
            FfiScreen::Detail {
                recipe_id: "oat001".to_string()
            }
        );
        assert!(book.take_viewport_reset());
        assert!(!book.take_viewport_reset());
        assert_eq!(book.detail_view(), Some(detail));

        book.go_home();
        assert_eq!(book.current_screen(), FfiScreen::List);
        assert!(book.detail_view().is_none());
        assert!(!book.take_viewport_reset());
    }

    #[test]
    fn test_book_unknown_recipe() {
        let book = FfiRecipeBook::from_json(catalog(), false);
        let result = book.select_recipe("missing".to_string());
        assert!(matches!(result, Err(MilkDepotError::NotFound { .. })));
        assert_eq!(book.current_screen(), FfiScreen::List);
    }

    #[test]
    fn test_book_placeholder_nutrition() {
        let book = FfiRecipeBook::from_json(catalog(), false);
        let detail = book.select_recipe("almond001".to_string()).unwrap();
        assert_eq!(
            detail.nutrition,
            vec![FfiNutritionRow::Placeholder {
                text: NO_NUTRITION.to_string(),
                column_span: 2,
                centered: true,
                informational: true,
            }]
        );
    }

    #[test]
    fn test_book_strict_load_failure_shows_placeholder() {
        let book = FfiRecipeBook::from_json(catalog(), true);
        assert!(book.load_error().is_some());
        assert_eq!(
            book.list_view(),
            vec![FfiListEntry::Placeholder {
                message: RECIPES_UNAVAILABLE.to_string()
            }]
        );
        assert!(book.issues().is_empty());
    }

    #[test]
    fn test_book_yaml_and_builtin() {
        let yaml = indoc! {r#"
            - id: hemp001
              name: Hemp Seed
            "#};
        let book = FfiRecipeBook::from_yaml(yaml.to_string(), false);
        assert_eq!(book.list_view().len(), 1);

        let builtin = FfiRecipeBook::builtin();
        assert!(builtin.load_error().is_none());
        assert!(builtin.select_recipe("almond001".to_string()).is_ok());
    }

    #[test]
    fn test_resolve_nutrient() {
        let resolved = resolve_nutrient("calories".to_string(), Some(65.0));
        assert_eq!(resolved.label, "Calories");
        assert_eq!(resolved.amount, "65 kcal");
        assert_eq!(resolve_nutrient("vitamin_d_iu".to_string(), None).amount, "-");
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
