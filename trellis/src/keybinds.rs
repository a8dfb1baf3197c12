//! Page-level keyboard shortcuts.

use std::collections::HashMap;
use std::str::FromStr;

use pagedom::{Key, Modifiers};
use thiserror::Error;

/// Errors that can occur when parsing a keybind string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindError {
    #[error("empty keybind")]
    Empty,

    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }
}

impl FromStr for KeyCombo {
    type Err = KeybindError;

    /// Parse strings such as `ctrl+c`, `esc`, `alt+shift+f2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key_part, modifier_parts) = match parts.split_last() {
            Some((key, mods)) if !key.is_empty() => (*key, mods),
            _ => return Err(KeybindError::Empty),
        };

        let mut modifiers = Modifiers::NONE;
        for part in modifier_parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                other => return Err(KeybindError::UnknownModifier(other.to_string())),
            }
        }

        let key = parse_key(key_part)?;
        Ok(Self { key, modifiers })
    }
}

fn parse_key(s: &str) -> Result<Key, KeybindError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c));
    }

    let key = match s.to_ascii_lowercase().as_str() {
        "enter" | "return" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "tab" => Key::Tab,
        "backtab" => Key::BackTab,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "space" => Key::Char(' '),
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n) if (1..=12).contains(&n) => Key::F(n),
            _ => return Err(KeybindError::UnknownKey(s.to_string())),
        },
    };
    Ok(key)
}

/// Something the runtime does in response to a keybind, independent of focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Rebuild the page from scratch, as a browser reload would.
    Reload,
}

/// Collection of keybinds
#[derive(Debug, Clone, Default)]
pub struct Keybinds {
    binds: HashMap<KeyCombo, Action>,
}

impl Keybinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a parsed key string to an action, replacing any previous binding.
    pub fn bind(mut self, combo: &str, action: Action) -> Result<Self, KeybindError> {
        let combo = combo.parse::<KeyCombo>()?;
        self.binds.insert(combo, action);
        Ok(self)
    }

    pub fn insert(&mut self, combo: KeyCombo, action: Action) {
        self.binds.insert(combo, action);
    }

    pub fn match_key(&self, key: Key, modifiers: Modifiers) -> Option<Action> {
        self.binds.get(&KeyCombo::new(key, modifiers)).copied()
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}
