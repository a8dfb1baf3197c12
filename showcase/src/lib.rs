//! The interactive page: a message button, a counter, a theme toggle and a
//! validated registration form.

pub mod handlers;
pub mod logging;
pub mod page;
pub mod paths;
pub mod registration;

use pagedom::{Document, EventKind};
use trellis::{App, AppConfig, Dispatcher};

use page::ids;

/// Page state outside the document. Reset on reload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShowcaseState {
    pub count: u64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Showcase;

impl App for Showcase {
    type State = ShowcaseState;

    fn config(&self) -> AppConfig {
        AppConfig::new("showcase")
    }

    fn document(&self) -> Document {
        page::document()
    }

    fn wire(&self, dispatcher: &mut Dispatcher<ShowcaseState>) {
        dispatcher
            .on(ids::EVENT_BUTTON, EventKind::Click, handlers::show_message)
            .on(ids::INCREMENT_BUTTON, EventKind::Click, handlers::increment)
            .on(ids::THEME_TOGGLE, EventKind::Click, handlers::toggle_theme)
            .on(ids::FORM, EventKind::Submit, registration::on_submit);
    }
}
