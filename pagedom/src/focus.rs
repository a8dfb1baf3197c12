use crate::document::Document;

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, document: &Document) -> Option<String> {
        let focusable = document.focusable_ids();
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.apply(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, document: &Document) -> Option<String> {
        let focusable = document.focusable_ids();
        let last = focusable.last()?.clone();

        let new_focus = match &self.focused {
            None => last,
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => last,
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.apply(new_focus)
    }

    fn apply(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        log::trace!("Focus moved to '{}'", new_focus);
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }
}
