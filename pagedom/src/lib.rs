pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text_input;
pub mod types;

pub use document::Document;
pub use element::{Element, ElementKind, InputKind};
pub use error::DomError;
pub use event::{DomEvent, EventKind, Key, Modifiers};
pub use focus::FocusState;
pub use render::{render, Frame, Line, Span};
pub use scroll::ScrollState;
pub use terminal::Terminal;
pub use text_input::{TextEditResult, TextInputState};
pub use types::*;
