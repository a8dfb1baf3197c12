use std::collections::HashMap;

use crate::event::{Key, Modifiers};

/// Outcome of feeding a key to a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// The value changed.
    Changed,
    /// The key was consumed without changing the value (cursor movement).
    Handled,
    /// The key means nothing to a text input.
    Ignored,
}

/// Tracks cursor positions for every text input on the page.
///
/// Values live in the document; this only remembers where the cursor sits.
/// Cursors are byte offsets kept on char boundaries.
#[derive(Debug, Default)]
pub struct TextInputState {
    cursors: HashMap<String, usize>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor for `id`, clamped to `text`. Inputs start with the cursor at the end.
    pub fn cursor(&self, id: &str, text: &str) -> usize {
        let cursor = self.cursors.get(id).copied().unwrap_or(text.len());
        clamp_to_boundary(text, cursor)
    }

    /// Move the cursor of `id` to the end of `text`.
    pub fn move_to_end(&mut self, id: &str, text: &str) {
        self.cursors.insert(id.to_string(), text.len());
    }

    /// Forget all cursors (e.g. after a reload).
    pub fn clear(&mut self) {
        self.cursors.clear();
    }

    /// Apply a key press to `text`, the current value of input `id`.
    pub fn handle_key(
        &mut self,
        id: &str,
        text: &mut String,
        key: Key,
        modifiers: Modifiers,
    ) -> TextEditResult {
        let cursor = self.cursor(id, text);

        let (result, new_cursor) = match key {
            Key::Char(c) if modifiers.is_typing() => {
                text.insert(cursor, c);
                (TextEditResult::Changed, cursor + c.len_utf8())
            }

            Key::Backspace if modifiers.is_empty() => match prev_boundary(text, cursor) {
                Some(prev) => {
                    text.replace_range(prev..cursor, "");
                    (TextEditResult::Changed, prev)
                }
                None => (TextEditResult::Handled, cursor),
            },

            Key::Delete if modifiers.is_empty() => match next_boundary(text, cursor) {
                Some(next) => {
                    text.replace_range(cursor..next, "");
                    (TextEditResult::Changed, cursor)
                }
                None => (TextEditResult::Handled, cursor),
            },

            Key::Left if !modifiers.ctrl => (
                TextEditResult::Handled,
                prev_boundary(text, cursor).unwrap_or(cursor),
            ),

            Key::Right if !modifiers.ctrl => (
                TextEditResult::Handled,
                next_boundary(text, cursor).unwrap_or(cursor),
            ),

            Key::Home => (TextEditResult::Handled, 0),
            Key::End => (TextEditResult::Handled, text.len()),

            _ => (TextEditResult::Ignored, cursor),
        };

        self.cursors.insert(id.to_string(), new_cursor);
        result
    }
}

fn clamp_to_boundary(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

fn prev_boundary(text: &str, cursor: usize) -> Option<usize> {
    text[..cursor].char_indices().next_back().map(|(i, _)| i)
}

fn next_boundary(text: &str, cursor: usize) -> Option<usize> {
    text[cursor..].chars().next().map(|c| cursor + c.len_utf8())
}
