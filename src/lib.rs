pub mod ffi;
pub mod model;
pub mod state;
pub mod store;
pub mod view;

pub use model::*;
pub use state::{Controller, Event, RenderSink, ViewState};
pub use store::{LoadError, LoadOptions, NutritionPolicy, RecipeStore};
pub use view::{render_detail, render_list, DetailView, ListEntry, ListView, ViewError};

uniffi::setup_scaffolding!();
