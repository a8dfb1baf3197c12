use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What an element is, which decides how it renders and how it reacts to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Body,
    Section,
    Heading,
    Paragraph,
    Label,
    Button,
    Form,
    Input(InputKind),
}

/// Flavour of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    /// Rendered masked.
    Password,
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: ElementKind,

    // Content
    /// Text content (label of a button, body of a paragraph, ...).
    pub text: String,
    /// Current value. Only meaningful for inputs.
    pub value: String,
    pub children: Vec<Element>,

    // Visual
    pub classes: BTreeSet<String>,
    /// Hint shown in an empty input.
    pub placeholder: Option<String>,

    // Interaction
    pub focusable: bool,
    /// Buttons with this flag submit their enclosing form when clicked.
    pub submits: bool,
}

impl Element {
    fn with_kind(prefix: &str, kind: ElementKind) -> Self {
        let focusable = matches!(kind, ElementKind::Button | ElementKind::Input(_));
        Self {
            id: generate_id(prefix),
            kind,
            text: String::new(),
            value: String::new(),
            children: Vec::new(),
            classes: BTreeSet::new(),
            placeholder: None,
            focusable,
            submits: false,
        }
    }

    pub fn body() -> Self {
        Self {
            id: "body".to_string(),
            ..Self::with_kind("body", ElementKind::Body)
        }
    }

    pub fn section() -> Self {
        Self::with_kind("section", ElementKind::Section)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::with_kind("heading", ElementKind::Heading).text(text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_kind("p", ElementKind::Paragraph).text(text)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::with_kind("label", ElementKind::Label).text(text)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::with_kind("button", ElementKind::Button).text(label)
    }

    /// A button that submits its enclosing form.
    pub fn submit_button(label: impl Into<String>) -> Self {
        Self {
            submits: true,
            ..Self::button(label)
        }
    }

    pub fn form() -> Self {
        Self::with_kind("form", ElementKind::Form)
    }

    pub fn input(kind: InputKind) -> Self {
        Self::with_kind("input", ElementKind::Input(kind))
    }

    // Builder methods

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // Queries

    pub fn is_input(&self) -> bool {
        matches!(self.kind, ElementKind::Input(_))
    }

    pub fn is_button(&self) -> bool {
        self.kind == ElementKind::Button
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}
