//! A running page without a terminal attached.
//!
//! The session owns everything that changes while the page is open and turns
//! raw input (keys, pointer presses) into DOM events. The runtime drives a
//! session from the terminal; tests drive it directly.

use log::{debug, info};
use pagedom::{
    render, Document, DomError, DomEvent, ElementKind, FocusState, Frame, Key, Modifiers,
    Palette, ScrollState, TextEditResult, TextInputState,
};

use crate::app::{App, AppConfig};
use crate::dispatch::{DispatchResult, Dispatcher};
use crate::error::HandlerError;
use crate::keybinds::Action;

/// Whether the runtime should keep going after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Session<A: App> {
    app: A,
    config: AppConfig,
    document: Document,
    state: A::State,
    dispatcher: Dispatcher<A::State>,
    focus: FocusState,
    inputs: TextInputState,
    scroll: ScrollState,
    /// Focus the viewport last scrolled to.
    revealed: Option<String>,
    reloads: u64,
}

impl<A: App> Session<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let mut dispatcher = Dispatcher::new();
        app.wire(&mut dispatcher);

        info!("Session started for '{}'", config.name);

        Self {
            document: app.document(),
            state: A::State::default(),
            app,
            config,
            dispatcher,
            focus: FocusState::new(),
            inputs: TextInputState::new(),
            scroll: ScrollState::new(),
            revealed: None,
            reloads: 0,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &A::State {
        &self.state
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Number of reloads since the session started.
    pub fn reloads(&self) -> u64 {
        self.reloads
    }

    // =========================================================================
    // DOM-level operations
    // =========================================================================

    /// Dispatch a click. Submit buttons then submit their enclosing form,
    /// unless a click handler prevented the default.
    pub fn click(&mut self, id: &str) -> Result<(), HandlerError> {
        let submits = self.document.get(id)?.submits;

        let mut event = DomEvent::click(id);
        let result = self.dispatch(&mut event)?;

        if submits && !matches!(result, DispatchResult::Handled { default_prevented: true }) {
            let form = self.document.enclosing_form(id).map(|form| form.id.clone());
            if let Some(form) = form {
                self.submit(&form)?;
            }
        }
        Ok(())
    }

    /// Dispatch a submit on `form_id`. Without `prevent_default()` the page reloads.
    pub fn submit(&mut self, form_id: &str) -> Result<(), HandlerError> {
        if self.document.get(form_id)?.kind != ElementKind::Form {
            return Err(DomError::NotAForm(form_id.to_string()).into());
        }

        let mut event = DomEvent::submit(form_id);
        self.dispatch(&mut event)?;

        if !event.default_prevented() {
            info!("Submit on '{}' not prevented, reloading", form_id);
            self.reload();
        }
        Ok(())
    }

    /// Replace an input's value and dispatch an input event.
    pub fn set_value(&mut self, id: &str, value: &str) -> Result<(), HandlerError> {
        self.document.set_value(id, value)?;
        self.inputs.move_to_end(id, value);
        self.dispatch(&mut DomEvent::input(id))?;
        Ok(())
    }

    /// Focus an input and type `text` into it at the cursor, one key at a time.
    pub fn type_text(&mut self, id: &str, text: &str) -> Result<(), HandlerError> {
        // Validates the id and that it is an input
        self.document.value(id)?;
        self.focus.focus(id);
        for c in text.chars() {
            self.edit_focused_input(id, Key::Char(c), Modifiers::NONE)?;
        }
        Ok(())
    }

    /// Rebuild the document and state from the app, as on a fresh load.
    pub fn reload(&mut self) {
        self.document = self.app.document();
        self.state = A::State::default();
        self.focus.blur();
        self.inputs.clear();
        self.scroll.reset();
        self.revealed = None;
        self.reloads += 1;
        debug!("Page reloaded ({} so far)", self.reloads);
    }

    // =========================================================================
    // Raw input
    // =========================================================================

    /// Route a key press: keybinds first, then focus navigation, then the
    /// focused element.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Result<Control, HandlerError> {
        if let Some(action) = self.config.keybinds.match_key(key, modifiers) {
            debug!("Keybind {:?} triggered", action);
            match action {
                Action::Quit => return Ok(Control::Quit),
                Action::Reload => {
                    self.reload();
                    return Ok(Control::Continue);
                }
            }
        }

        match key {
            Key::Tab => {
                self.focus.focus_next(&self.document);
                return Ok(Control::Continue);
            }
            Key::BackTab => {
                self.focus.focus_prev(&self.document);
                return Ok(Control::Continue);
            }
            Key::Up | Key::Down if modifiers.is_empty() => {
                self.scroll_by(if key == Key::Up { -1 } else { 1 });
                return Ok(Control::Continue);
            }
            _ => {}
        }

        let Some(focused) = self.focus.focused().map(str::to_string) else {
            return Ok(Control::Continue);
        };
        // Focus may point at an element a handler removed
        let Ok(kind) = self.document.get(&focused).map(|el| el.kind) else {
            self.focus.blur();
            return Ok(Control::Continue);
        };

        match kind {
            ElementKind::Button => {
                if modifiers.is_empty() && matches!(key, Key::Enter | Key::Char(' ')) {
                    self.click(&focused)?;
                }
            }
            ElementKind::Input(_) => {
                if key == Key::Enter {
                    // Implicit submission
                    let form = self.document.enclosing_form(&focused).map(|form| form.id.clone());
                    if let Some(form) = form {
                        self.submit(&form)?;
                    }
                } else {
                    self.edit_focused_input(&focused, key, modifiers)?;
                }
            }
            _ => {}
        }

        Ok(Control::Continue)
    }

    /// A pointer press on element `id`: focus it if it can take focus and
    /// click it if it is a button.
    pub fn pointer_down(&mut self, id: &str) -> Result<(), HandlerError> {
        let element = self.document.get(id)?;
        let (focusable, is_button) = (element.focusable, element.is_button());

        if focusable {
            self.focus.focus(id);
        }
        if is_button {
            self.click(id)?;
        }
        Ok(())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Palette for the current body mode.
    pub fn palette(&self) -> Palette {
        Palette::for_document(&self.document)
    }

    /// Render the current page at the given width.
    pub fn frame(&self, width: u16) -> Frame {
        let focused = self.focus.focused();
        let cursor = focused.and_then(|id| {
            let value = self.document.value(id).ok()?;
            Some(self.inputs.cursor(id, value))
        });
        render(&self.document, focused, cursor, &self.palette(), width)
    }

    /// Render the part of the page that fits a `width` x `height` screen.
    ///
    /// When focus moved since the last view, scrolls the focused element on screen.
    pub fn view(&mut self, width: u16, height: u16) -> Frame {
        let frame = self.frame(width);
        self.scroll.fit(frame.lines.len(), height as usize);

        let focused = self.focus.focused().map(str::to_string);
        if focused != self.revealed {
            if let Some(row) = focused.as_deref().and_then(|id| frame.row_of(id)) {
                self.scroll.scroll_into_view(row);
            }
            self.revealed = focused;
        }

        frame.viewport(self.scroll.offset(), height)
    }

    /// Scroll the page by `delta` rows, within the size of the last view.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.scroll.scroll_by(delta)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn dispatch(&mut self, event: &mut DomEvent) -> Result<DispatchResult, HandlerError> {
        self.dispatcher
            .dispatch(&mut self.state, &mut self.document, event)
    }

    fn edit_focused_input(&mut self, id: &str, key: Key, modifiers: Modifiers) -> Result<(), HandlerError> {
        let value = self.document.value_mut(id)?;
        if self.inputs.handle_key(id, value, key, modifiers) == TextEditResult::Changed {
            self.dispatch(&mut DomEvent::input(id))?;
        }
        Ok(())
    }
}
