use super::model::{ListEntry, ListView, RECIPES_UNAVAILABLE};
use crate::store::RecipeStore;
use log::{debug, error};

/// Builds the list screen from the store's current ordering.
///
/// A missing or empty store yields a single placeholder entry instead of
/// recipes. This is a display fallback, not an error.
pub fn render_list(store: Option<&RecipeStore>) -> ListView {
    let store = match store {
        Some(store) if !store.is_empty() => store,
        _ => {
            error!("Recipe catalog is missing or empty, showing placeholder");
            return ListView {
                entries: vec![ListEntry::Placeholder {
                    message: RECIPES_UNAVAILABLE.to_string(),
                }],
            };
        }
    };

    let entries: Vec<ListEntry> = store
        .recipes()
        .iter()
        .map(|recipe| ListEntry::Recipe {
            name: recipe.name.clone(),
            id: recipe.id.clone(),
        })
        .collect();
    debug!("Rendered recipe list with {} entries", entries.len());

    ListView { entries }
}
