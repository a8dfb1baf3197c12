//! The app trait: what a page provides to the runtime.

mod config;

pub use config::{default_keybinds, AppConfig};

use pagedom::Document;

use crate::dispatch::Dispatcher;

/// A page: its initial document, its state, and the handlers wiring them.
///
/// `document()` and `State::default()` are called again on every reload, so
/// they must describe the page as it looks when freshly loaded.
pub trait App {
    /// Page state that is not part of the document (e.g. counters).
    type State: Default;

    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Build the document in its initial state.
    fn document(&self) -> Document;

    /// Register event handlers. Called once per session.
    fn wire(&self, dispatcher: &mut Dispatcher<Self::State>);
}
