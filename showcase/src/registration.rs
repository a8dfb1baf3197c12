//! Registration form validation.
//!
//! All three checks run on every submission. Only the first failing rule of a
//! field is shown, so an empty email reports "required" rather than the
//! format error.

use std::sync::LazyLock;

use log::{debug, info};
use pagedom::{Document, DomEvent};
use regex::Regex;
use trellis::{HandlerError, ValidationError, ValidationResult, Validator};

use crate::page::ids;
use crate::ShowcaseState;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Non-space, non-@ runs around a single @, with a dot somewhere after it.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Each validated field and the slot its error is written to.
const ERROR_SLOTS: [(&str, &str); 3] = [
    (ids::NAME, ids::NAME_ERROR),
    (ids::EMAIL, ids::EMAIL_ERROR),
    (ids::PASSWORD, ids::PASSWORD_ERROR),
];

/// Field values read at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> Registration<'a> {
    pub fn read(document: &'a Document) -> Result<Self, HandlerError> {
        Ok(Self {
            name: document.value(ids::NAME)?,
            email: document.value(ids::EMAIL)?,
            password: document.value(ids::PASSWORD)?,
        })
    }

    /// Run the three checks. Errors are keyed by the field's element id.
    pub fn validate(&self) -> Result<ValidationResult, ValidationError> {
        Validator::new()
            .field(ids::NAME, self.name)
            .required(NAME_REQUIRED)
            .field(ids::EMAIL, self.email)
            .required(EMAIL_REQUIRED)
            .matches(&EMAIL_RE, EMAIL_INVALID)
            .field(ids::PASSWORD, self.password)
            .min_length(PASSWORD_MIN_LENGTH, PASSWORD_TOO_SHORT)
            .validate()
    }
}

/// Submit handler for the registration form.
pub fn on_submit(
    _state: &mut ShowcaseState,
    document: &mut Document,
    event: &mut DomEvent,
) -> Result<(), HandlerError> {
    // Never navigates away, valid or not
    event.prevent_default();

    clear_messages(document)?;

    let result = Registration::read(document)?.validate()?;

    if result.is_valid() {
        info!("Registration accepted");
        document.set_text_content(ids::SUCCESS, SUCCESS_MESSAGE)?;
        document.reset_form(ids::FORM)?;
        return Ok(());
    }

    debug!("Registration rejected with {} error(s)", result.errors().len());
    for (field, slot) in ERROR_SLOTS {
        if let Some(message) = result.error_for(field) {
            document.set_text_content(slot, message)?;
        }
    }
    Ok(())
}

fn clear_messages(document: &mut Document) -> Result<(), HandlerError> {
    for (_, slot) in ERROR_SLOTS {
        document.set_text_content(slot, "")?;
    }
    document.set_text_content(ids::SUCCESS, "")?;
    Ok(())
}
