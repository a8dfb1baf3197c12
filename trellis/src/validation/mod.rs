//! Form validation.
//!
//! A fluent builder that checks field values against rules and collects one
//! message per failing field. Every field is checked; a failure in one field
//! never skips the others.
//!
//! # Example
//!
//! ```
//! use trellis::validation::Validator;
//!
//! let result = Validator::new()
//!     .field("username", "")
//!         .required("Username is required")
//!         .min_length(3, "Username must be at least 3 characters")
//!     .field("email", "someone@example.com")
//!         .required("Email is required")
//!         .pattern(r"^\S+@\S+$", "Please enter a valid email")
//!     .validate()
//!     .unwrap();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.error_for("username"), Some("Username is required"));
//! assert_eq!(result.error_for("email"), None);
//! ```

mod result;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validator::{FieldBuilder, ValidationError, Validator};
