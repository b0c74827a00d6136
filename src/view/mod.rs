//! View-models for the list and detail screens.
//!
//! Renderers here only describe what a screen shows. Drawing it is up to
//! whatever sink the host plugs in.

use thiserror::Error;

mod detail;
mod list;
mod model;

pub use detail::{render_detail, render_detail_by_id, render_detail_with};
pub use list::render_list;
pub use model::*;

/// Errors raised while building a view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),
}
