//! Validation error taxonomy.
//!
//! Four failure kinds, all recovered locally into a 400 response:
//! - missing_field: a required key is absent
//! - type_mismatch: a value does not match its declared type
//! - null_not_allowed: explicit null on a non-nullable field
//! - unknown_field: a key the schema does not declare

use std::fmt;

use thiserror::Error;

/// A single validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field declared required is absent from the candidate.
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// A field value does not match its declared type.
    #[error("field '{field}' expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Explicit null supplied for a field that is not nullable.
    #[error("field '{0}' does not accept null")]
    NullNotAllowed(String),

    /// The candidate carries a key the schema does not declare.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

impl ValidationError {
    /// Stable kind string used in HTTP error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::NullNotAllowed(_) => "null_not_allowed",
            Self::UnknownField(_) => "unknown_field",
        }
    }

    /// The field the failure names.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field)
            | Self::NullNotAllowed(field)
            | Self::UnknownField(field) => field,
            Self::TypeMismatch { field, .. } => field,
        }
    }
}

/// Every failure found while validating one candidate document.
///
/// Always non-empty; the HTTP layer reports each entry so a caller sees
/// all failing fields at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wraps a non-empty list of failures.
    pub fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    /// Wraps a single failure.
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// The collected failures.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed value; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings_are_stable() {
        assert_eq!(
            ValidationError::MissingField("result".into()).kind(),
            "missing_field"
        );
        assert_eq!(
            ValidationError::TypeMismatch {
                field: "whitelisted".into(),
                expected: "boolean",
                actual: "string",
            }
            .kind(),
            "type_mismatch"
        );
        assert_eq!(
            ValidationError::NullNotAllowed("protocol".into()).kind(),
            "null_not_allowed"
        );
        assert_eq!(
            ValidationError::UnknownField("extra".into()).kind(),
            "unknown_field"
        );
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::TypeMismatch {
            field: "timestamp".into(),
            expected: "integer",
            actual: "string",
        };
        assert_eq!(err.field(), "timestamp");
        assert_eq!(ValidationError::MissingField("user".into()).field(), "user");
    }

    #[test]
    fn test_display_joins_all_failures() {
        let errors = ValidationErrors::new(vec![
            ValidationError::MissingField("result".into()),
            ValidationError::UnknownField("extra".into()),
        ]);
        let display = format!("{}", errors);
        assert!(display.contains("result"));
        assert!(display.contains("extra"));
        assert!(display.contains("; "));
    }
}
