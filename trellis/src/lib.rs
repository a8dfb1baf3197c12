//! Trellis - wires event handlers and validation onto a `pagedom` page and
//! runs it in the terminal.

pub mod app;
pub mod dispatch;
pub mod error;
pub mod keybinds;
pub mod runtime;
pub mod session;
pub mod validation;

pub use app::{App, AppConfig};
pub use dispatch::{DispatchResult, Dispatcher, Handler};
pub use error::{HandlerError, RuntimeError};
pub use keybinds::{Action, KeyCombo, KeybindError, Keybinds};
pub use runtime::Runtime;
pub use session::{Control, Session};
pub use validation::{FieldError, ValidationError, ValidationResult, Validator};
