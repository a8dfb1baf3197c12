//! The page layout.

use pagedom::{Document, Element, InputKind};

/// Element ids the handlers refer to.
pub mod ids {
    pub const BODY: &str = "body";

    pub const EVENT_BUTTON: &str = "eventButton";
    pub const MESSAGE_AREA: &str = "messageArea";

    pub const INCREMENT_BUTTON: &str = "incrementBtn";
    pub const COUNTER: &str = "counter";

    pub const THEME_TOGGLE: &str = "themeToggleBtn";

    pub const FORM: &str = "registrationForm";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const NAME_ERROR: &str = "nameError";
    pub const EMAIL_ERROR: &str = "emailError";
    pub const PASSWORD_ERROR: &str = "passwordError";
    pub const SUBMIT: &str = "submitBtn";
    pub const SUCCESS: &str = "formSuccessMessage";
}

pub const DARK_MODE_LABEL: &str = "Dark Mode";
pub const LIGHT_MODE_LABEL: &str = "Light Mode";

/// Build the page as it looks on a fresh load.
///
/// The layout fits a 24-row terminal without scrolling.
pub fn document() -> Document {
    Document::new(
        Element::body()
            .child(Element::heading("Interactive Page"))
            .child(
                Element::paragraph("Tab moves focus, Enter presses, Ctrl+R reloads, Esc quits")
                    .class("muted"),
            )
            .child(events_section())
            .child(widgets_section())
            .child(form_section()),
    )
}

fn events_section() -> Element {
    Element::section()
        .child(Element::heading("Event Handling"))
        .child(Element::button("Click Me").id(ids::EVENT_BUTTON))
        .child(Element::paragraph("").id(ids::MESSAGE_AREA))
}

fn widgets_section() -> Element {
    Element::section()
        .child(Element::heading("Interactive Elements"))
        .child(Element::paragraph("0").id(ids::COUNTER).class("primary"))
        .child(Element::button("Increment").id(ids::INCREMENT_BUTTON))
        .child(Element::button(DARK_MODE_LABEL).id(ids::THEME_TOGGLE))
}

fn form_section() -> Element {
    Element::section()
        .child(Element::heading("Registration"))
        .child(
            Element::form()
                .id(ids::FORM)
                .children(field("Name", InputKind::Text, ids::NAME, "Your name", ids::NAME_ERROR))
                .children(field(
                    "Email",
                    InputKind::Email,
                    ids::EMAIL,
                    "you@example.com",
                    ids::EMAIL_ERROR,
                ))
                .children(field(
                    "Password",
                    InputKind::Password,
                    ids::PASSWORD,
                    "At least 8 characters",
                    ids::PASSWORD_ERROR,
                ))
                .child(Element::submit_button("Register").id(ids::SUBMIT)),
        )
        .child(Element::paragraph("").id(ids::SUCCESS).class("success"))
}

/// Label, input and error slot for one form field.
fn field(label: &str, kind: InputKind, id: &str, placeholder: &str, error_id: &str) -> [Element; 3] {
    [
        Element::label(label),
        Element::input(kind).id(id).placeholder(placeholder),
        Element::paragraph("").id(error_id).class("error"),
    ]
}
