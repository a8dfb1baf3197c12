use trellis::validation::{FieldError, ValidationError, ValidationResult, Validator};

// ============================================================================
// Built-in rules
// ============================================================================

#[test]
fn test_required_trims_whitespace() {
    let result = Validator::new()
        .field("name", "   ")
        .required("Name is required.")
        .validate()
        .unwrap();
    assert_eq!(result.error_for("name"), Some("Name is required."));

    let result = Validator::new()
        .field("name", " a ")
        .required("Name is required.")
        .validate()
        .unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_min_length_counts_utf16_units() {
    let check = |v: &str| {
        Validator::new()
            .field("pw", v)
            .min_length(8, "too short")
            .validate()
            .unwrap()
    };

    assert!(check("abc123").is_invalid());
    assert!(check("12345678").is_valid());
    // Whitespace counts
    assert!(check("    abcd").is_valid());
    // Code units, not bytes
    assert!(check("ééééééé").is_invalid());
    // Astral characters count twice
    assert!(check("😀😀😀😀").is_valid());
    assert!(check("😀😀😀").is_invalid());
}

#[test]
fn test_max_length() {
    let result = Validator::new()
        .field("code", "abcdef")
        .max_length(4, "too long")
        .validate()
        .unwrap();
    assert_eq!(result.error_for("code"), Some("too long"));

    let result = Validator::new()
        .field("code", "😀😀😀")
        .max_length(4, "too long")
        .validate()
        .unwrap();
    assert_eq!(result.error_for("code"), Some("too long"));
}

#[test]
fn test_pattern_matches_raw_value() {
    let check = |v: &str| {
        Validator::new()
            .field("email", v)
            .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", "bad email")
            .validate()
            .unwrap()
    };

    assert!(check("a@b.co").is_valid());
    assert!(check("foo").is_invalid());
    assert!(check("foo@bar").is_invalid());
    assert!(check("foo@bar.com ").is_invalid());
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let err = Validator::new()
        .field("x", "value")
        .pattern("(unclosed", "never shown")
        .validate()
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
}

#[test]
fn test_custom_rule_on_other_types() {
    let result = Validator::new()
        .field("age", 15u32)
        .rule(|age| *age >= 18, "Must be an adult")
        .validate()
        .unwrap();
    assert_eq!(result.error_for("age"), Some("Must be an adult"));
}

// ============================================================================
// Reporting
// ============================================================================

#[test]
fn test_first_failing_rule_wins() {
    let result = Validator::new()
        .field("email", "")
        .required("Email is required.")
        .pattern(r"^\S+@\S+$", "Please enter a valid email address.")
        .validate()
        .unwrap();
    assert_eq!(result.error_for("email"), Some("Email is required."));
    assert_eq!(result.errors().len(), 1);
}

#[test]
fn test_every_field_is_checked() {
    let result = Validator::new()
        .field("a", "")
        .required("a missing")
        .field("b", "ok")
        .required("b missing")
        .field("c", "")
        .required("c missing")
        .validate()
        .unwrap();

    assert_eq!(
        result,
        ValidationResult::Invalid(vec![
            FieldError {
                field_name: "a".to_string(),
                message: "a missing".to_string(),
            },
            FieldError {
                field_name: "c".to_string(),
                message: "c missing".to_string(),
            },
        ])
    );
    assert_eq!(result.first_error().map(|e| e.field_name.as_str()), Some("a"));
    assert_eq!(result.error_for("b"), None);
}

#[test]
fn test_empty_validator_is_valid() {
    let result = Validator::new().validate().unwrap();
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    assert!(result.first_error().is_none());
}
