//! App configuration types.

use std::time::Duration;

use pagedom::{Key, Modifiers};

use crate::keybinds::{Action, KeyCombo, Keybinds};

/// Per-app configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Display name, used in logs.
    pub name: &'static str,

    /// Shortcuts that work regardless of focus.
    pub keybinds: Keybinds,

    /// How long the runtime waits for input before re-checking the terminal size.
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "App",
            keybinds: default_keybinds(),
            poll_interval: Duration::from_millis(250),
        }
    }
}

impl AppConfig {
    /// Create a new config with the given name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Replace the keybinds.
    pub fn keybinds(mut self, keybinds: Keybinds) -> Self {
        self.keybinds = keybinds;
        self
    }
}

/// `ctrl+c` / `ctrl+q` / `esc` quit, `ctrl+r` reloads.
pub fn default_keybinds() -> Keybinds {
    let mut keybinds = Keybinds::new();
    keybinds.insert(KeyCombo::new(Key::Char('c'), Modifiers::CTRL), Action::Quit);
    keybinds.insert(KeyCombo::new(Key::Char('q'), Modifiers::CTRL), Action::Quit);
    keybinds.insert(KeyCombo::key(Key::Escape), Action::Quit);
    keybinds.insert(KeyCombo::new(Key::Char('r'), Modifiers::CTRL), Action::Reload);
    keybinds
}
