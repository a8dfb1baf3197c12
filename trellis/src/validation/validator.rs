//! Validator builder for fluent validation API.

use regex::Regex;
use thiserror::Error;

use super::result::{FieldError, ValidationResult};

/// A rule could not be built.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Internal representation of a validated field.
struct FieldEntry {
    name: String,
    /// Messages of every failing rule, in rule order.
    errors: Vec<String>,
}

/// Builder for validating multiple form fields.
///
/// Rules are evaluated as they are added, against the value captured by
/// `.field()`. Only the first failing rule of a field is reported.
pub struct Validator {
    fields: Vec<FieldEntry>,
    build_error: Option<ValidationError>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            build_error: None,
        }
    }

    /// Add a field to validate.
    pub fn field<V>(self, name: impl Into<String>, value: V) -> FieldBuilder<V> {
        FieldBuilder {
            validator: self,
            name: name.into(),
            value,
            errors: Vec::new(),
        }
    }

    /// Collect the outcome of all fields.
    ///
    /// Fails only if a rule itself was malformed (e.g. a bad regex).
    pub fn validate(self) -> Result<ValidationResult, ValidationError> {
        if let Some(err) = self.build_error {
            return Err(err);
        }

        let errors: Vec<FieldError> = self
            .fields
            .into_iter()
            .filter_map(|field| {
                let message = field.errors.into_iter().next()?;
                Some(FieldError {
                    field_name: field.name,
                    message,
                })
            })
            .collect();

        Ok(ValidationResult::from_errors(errors))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<V> {
    validator: Validator,
    name: String,
    value: V,
    errors: Vec<String>,
}

impl<V> FieldBuilder<V> {
    /// Add a custom validation rule. `f` returns true when the value is valid.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(&V) -> bool,
    {
        if !f(&self.value) {
            self.errors.push(msg.into());
        }
        self
    }

    /// Continue to the next field.
    pub fn field<V2>(self, name: impl Into<String>, value: V2) -> FieldBuilder<V2> {
        self.finalize().field(name, value)
    }

    /// Finalize and collect the outcome of all fields.
    pub fn validate(self) -> Result<ValidationResult, ValidationError> {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        if let Some(first) = self.errors.first() {
            log::trace!("Field '{}' failed: {}", self.name, first);
        }

        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name: self.name,
            errors: self.errors,
        });
        validator
    }
}

// Built-in rules for string values
impl<V: AsRef<str>> FieldBuilder<V> {
    /// Require the field to be non-empty after trimming whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.as_ref().trim().is_empty(), msg)
    }

    /// Require a minimum untrimmed length.
    ///
    /// Lengths are UTF-16 code units, the unit browsers use for
    /// `value.length`: an emoji outside the BMP counts as two.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| utf16_len(v.as_ref()) >= min, msg)
    }

    /// Require a maximum untrimmed length, in UTF-16 code units.
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| utf16_len(v.as_ref()) <= max, msg)
    }

    /// Require the raw value to match a regex pattern.
    ///
    /// A malformed pattern makes `validate()` return an error.
    pub fn pattern(mut self, pattern: &str, msg: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(re) => self.matches(&re, msg),
            Err(source) => {
                if self.validator.build_error.is_none() {
                    self.validator.build_error = Some(ValidationError::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    });
                }
                self
            }
        }
    }

    /// Require the raw value to match an already compiled regex.
    pub fn matches(self, re: &Regex, msg: impl Into<String>) -> Self {
        self.rule(|v| re.is_match(v.as_ref()), msg)
    }
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
