//! Task field validation
//!
//! Explicit validation invoked by the request handler before any store call.
//! All violations for a payload are collected into a field -> message map
//! rather than short-circuiting on the first failure.

use std::collections::BTreeMap;

use serde::Serialize;

use super::model::Task;

/// Minimum description length in characters
pub const DESCRIPTION_MIN: usize = 3;

/// Maximum description length in characters
pub const DESCRIPTION_MAX: usize = 255;

/// Map from invalid field name to a human-readable violation message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

/// Validate a task payload, collecting every field violation
///
/// The blank check trims; the length check counts characters of the raw
/// description. A blank description reports only the blank message.
pub fn validate(task: &Task) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let description = task.description.as_str();
    if description.trim().is_empty() {
        errors.insert("description", "Task description must not be empty");
    } else if !(DESCRIPTION_MIN..=DESCRIPTION_MAX).contains(&description.chars().count()) {
        errors.insert(
            "description",
            format!(
                "Task description must be between {} and {} characters",
                DESCRIPTION_MIN, DESCRIPTION_MAX
            ),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description_error(description: &str) -> Option<String> {
        validate(&Task::new(description))
            .get("description")
            .map(str::to_string)
    }

    #[test]
    fn test_empty_description_rejected() {
        assert_eq!(
            description_error(""),
            Some("Task description must not be empty".to_string())
        );
    }

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(
            description_error("   "),
            Some("Task description must not be empty".to_string())
        );
    }

    #[test]
    fn test_short_description_rejected() {
        assert_eq!(
            description_error("ab"),
            Some("Task description must be between 3 and 255 characters".to_string())
        );
    }

    #[test]
    fn test_long_description_rejected() {
        assert!(description_error(&"a".repeat(256)).is_some());
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        assert!(description_error("abc").is_none());
        assert!(description_error(&"a".repeat(255)).is_none());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 255 two-byte characters are within the limit
        assert!(description_error(&"ё".repeat(255)).is_none());
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let errors = validate(&Task::new(""));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"description": "Task description must not be empty"})
        );
    }
}
