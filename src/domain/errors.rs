//! Field-level rejection accumulator shared by all validation rules.

use std::fmt;

use serde::Serialize;

/// Stable rejection codes attached to field paths.
///
/// Downstream consumers map these strings to localized messages, so
/// they are a compatibility contract and must be reproduced exactly.
pub mod codes {
    /// A required value is missing or empty.
    pub const NULL: &str = "error.null";
    /// The person record has no usable name.
    pub const PERSON_NAME_LENGTH: &str = "Person.names.length";
    /// The username does not match the local identifier pattern.
    pub const USERNAME_PATTERN: &str = "error.username.pattern";
    /// The username is not a well-formed email address.
    pub const USERNAME_EMAIL: &str = "error.username.email";
    /// The email address is not well-formed.
    pub const EMAIL_INVALID: &str = "error.email.invalid";
}

/// A single rejection: a dotted field path plus a rejection code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path of the rejected field, e.g. `person.gender`.
    pub field: String,
    /// Rejection code from [`codes`].
    pub code: String,
}

/// Accumulates rejections in evaluation order.
///
/// Duplicates are retained and rule evaluation order is fixed, so the
/// contents are reproducible for identical input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejection for a field path.
    pub fn reject(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            code: code.into(),
        });
    }

    /// Append every rejection from another accumulator, preserving order.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of recorded rejections.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Codes recorded for a field path, in evaluation order.
    pub fn codes_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.code.as_str())
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", error.field, error.code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accumulator_is_empty() {
        let errors = ValidationErrors::new();

        assert!(errors.is_empty());
        assert!(!errors.has_errors());
        assert_eq!(errors.error_count(), 0);
        assert!(errors.codes_for("username").is_empty());
    }

    #[test]
    fn test_reject_records_in_order() {
        let mut errors = ValidationErrors::new();
        errors.reject("retireReason", codes::NULL);
        errors.reject("person.gender", codes::NULL);

        let recorded: Vec<(&str, &str)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.code.as_str()))
            .collect();
        assert_eq!(
            recorded,
            vec![
                ("retireReason", "error.null"),
                ("person.gender", "error.null"),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_retained() {
        let mut errors = ValidationErrors::new();
        errors.reject("person", codes::NULL);
        errors.reject("person", codes::NULL);

        assert_eq!(errors.error_count(), 2);
        assert_eq!(errors.codes_for("person"), vec!["error.null", "error.null"]);
    }

    #[test]
    fn test_codes_for_filters_by_field() {
        let mut errors = ValidationErrors::new();
        errors.reject("person", codes::NULL);
        errors.reject("person", codes::PERSON_NAME_LENGTH);
        errors.reject("username", codes::USERNAME_PATTERN);

        assert_eq!(
            errors.codes_for("person"),
            vec!["error.null", "Person.names.length"]
        );
        assert_eq!(errors.codes_for("username"), vec!["error.username.pattern"]);
        assert!(errors.codes_for("email").is_empty());
    }

    #[test]
    fn test_merge_concatenates_preserving_order() {
        let mut first = ValidationErrors::new();
        first.reject("retireReason", codes::NULL);

        let mut second = ValidationErrors::new();
        second.reject("person.gender", codes::NULL);
        second.reject("username", codes::USERNAME_PATTERN);

        first.merge(second);

        assert_eq!(first.error_count(), 3);
        let fields: Vec<&str> = first.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["retireReason", "person.gender", "username"]);
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut errors = ValidationErrors::new();
        errors.reject("email", codes::EMAIL_INVALID);

        errors.merge(ValidationErrors::new());

        assert_eq!(errors.error_count(), 1);
    }

    #[test]
    fn test_display_one_line_per_rejection() {
        let mut errors = ValidationErrors::new();
        errors.reject("retireReason", codes::NULL);
        errors.reject("username", codes::USERNAME_PATTERN);

        assert_eq!(
            errors.to_string(),
            "retireReason: error.null\nusername: error.username.pattern"
        );
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut errors = ValidationErrors::new();
        errors.reject("email", codes::EMAIL_INVALID);

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"[{"field":"email","code":"error.email.invalid"}]"#);
    }
}
