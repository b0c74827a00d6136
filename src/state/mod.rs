//! Screen navigation.
//!
//! The [`Controller`] owns the store and the current [`ViewState`]. Events
//! arrive one at a time from the host; each one is fully handled, including
//! the calls into the [`RenderSink`], before the next is accepted.

use crate::store::{LoadError, RecipeStore};
use crate::view::{render_detail_by_id, render_list, DetailView, ListView, ViewError};
use log::{debug, error};

/// The screen currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    ListScreen,
    DetailScreen(String),
}

impl ViewState {
    /// Id of the recipe on screen, if any.
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            ViewState::ListScreen => None,
            ViewState::DetailScreen(id) => Some(id),
        }
    }
}

/// Input events delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectRecipe(String),
    GoHome,
}

/// Presentation layer receiving the view-models.
pub trait RenderSink {
    fn show_list(&mut self, view: &ListView);

    fn show_detail(&mut self, view: &DetailView);

    /// Scrolls back to the top. Called once after every successful switch
    /// to a detail screen.
    fn reset_viewport(&mut self);
}

/// Drives the list and detail screens.
///
/// # Examples
///
/// ```
/// use milk_depot::{Controller, DetailView, ListView, RecipeStore, RenderSink, ViewState};
///
/// #[derive(Default)]
/// struct Headless;
///
/// impl RenderSink for Headless {
///     fn show_list(&mut self, _view: &ListView) {}
///     fn show_detail(&mut self, _view: &DetailView) {}
///     fn reset_viewport(&mut self) {}
/// }
///
/// let mut controller = Controller::new(RecipeStore::builtin()?, Headless);
/// controller.start();
/// controller.select_recipe("almond001")?;
/// assert_eq!(controller.state(), &ViewState::DetailScreen("almond001".to_string()));
/// controller.go_home();
/// assert_eq!(controller.state(), &ViewState::ListScreen);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Controller<S> {
    store: Option<RecipeStore>,
    state: ViewState,
    sink: S,
}

impl<S: RenderSink> Controller<S> {
    pub fn new(store: RecipeStore, sink: S) -> Self {
        Controller {
            store: Some(store),
            state: ViewState::ListScreen,
            sink,
        }
    }

    /// A controller with no usable catalog. The list shows its placeholder
    /// and every selection fails.
    pub fn without_catalog(sink: S) -> Self {
        Controller {
            store: None,
            state: ViewState::ListScreen,
            sink,
        }
    }

    /// Builds a controller from the outcome of loading a catalog, falling
    /// back to [`Controller::without_catalog`] when loading failed.
    pub fn from_load(loaded: Result<RecipeStore, LoadError>, sink: S) -> Self {
        match loaded {
            Ok(store) => Self::new(store, sink),
            Err(e) => {
                error!("Recipe catalog unavailable: {}", e);
                Self::without_catalog(sink)
            }
        }
    }

    /// Sorts the catalog and shows the list screen.
    pub fn start(&mut self) -> ListView {
        if let Some(store) = self.store.as_mut() {
            store.sort();
        }
        self.show_list()
    }

    /// Switches to the detail screen of `id`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::RecipeNotFound` if no recipe has that id. The
    /// current screen is left as it was and nothing is sent to the sink.
    pub fn select_recipe(&mut self, id: &str) -> Result<(), ViewError> {
        let view = match self.store.as_ref() {
            Some(store) => render_detail_by_id(store, id)?,
            None => return Err(ViewError::RecipeNotFound(id.to_string())),
        };

        self.sink.show_detail(&view);
        self.state = ViewState::DetailScreen(id.to_string());
        self.sink.reset_viewport();
        debug!("Switched to detail screen for {}", id);
        Ok(())
    }

    /// Returns to the list screen.
    pub fn go_home(&mut self) {
        self.show_list();
        debug!("Switched to list screen");
    }

    /// Handles one event from the host.
    pub fn dispatch(&mut self, event: Event) -> Result<(), ViewError> {
        match event {
            Event::SelectRecipe(id) => self.select_recipe(&id),
            Event::GoHome => {
                self.go_home();
                Ok(())
            }
        }
    }

    fn show_list(&mut self) -> ListView {
        let view = render_list(self.store.as_ref());
        self.sink.show_list(&view);
        self.state = ViewState::ListScreen;
        view
    }
}

impl<S> Controller<S> {
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> Option<&RecipeStore> {
        self.store.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
