//! Click handlers for the message button, the counter and the theme toggle.

use log::debug;
use pagedom::{Document, DomEvent, DARK_MODE_CLASS};
use trellis::HandlerError;

use crate::page::{ids, DARK_MODE_LABEL, LIGHT_MODE_LABEL};
use crate::ShowcaseState;

pub const CLICK_MESSAGE: &str = "Button was clicked! The page is now interactive.";

pub fn show_message(
    _state: &mut ShowcaseState,
    document: &mut Document,
    _event: &mut DomEvent,
) -> Result<(), HandlerError> {
    document.set_text_content(ids::MESSAGE_AREA, CLICK_MESSAGE)?;
    Ok(())
}

pub fn increment(
    state: &mut ShowcaseState,
    document: &mut Document,
    _event: &mut DomEvent,
) -> Result<(), HandlerError> {
    state.count = state.count.saturating_add(1);
    document.set_text_content(ids::COUNTER, state.count.to_string())?;
    debug!("Counter at {}", state.count);
    Ok(())
}

/// Flip the body's dark-mode class; the label names the mode a click switches to.
pub fn toggle_theme(
    _state: &mut ShowcaseState,
    document: &mut Document,
    _event: &mut DomEvent,
) -> Result<(), HandlerError> {
    let dark = document.toggle_class(ids::BODY, DARK_MODE_CLASS)?;
    let label = if dark { LIGHT_MODE_LABEL } else { DARK_MODE_LABEL };
    document.set_text_content(ids::THEME_TOGGLE, label)?;
    debug!("Theme switched to {}", if dark { "dark" } else { "light" });
    Ok(())
}
