//! Schema validator for candidate audit documents.
//!
//! Validation semantics:
//! - Every required field must be present
//! - No undeclared fields (closed-schema policy)
//! - Field types match exactly, with no coercion
//! - Explicit null accepted only on nullable fields
//!
//! Validation is deterministic, has no side effects, and never mutates the
//! candidate. Every failure for a candidate is collected so callers can
//! report all failing fields at once.

use serde_json::Value;

use super::errors::{ValidationError, ValidationErrors, ValidationResult};
use super::record::AuditRecord;
use super::types::{FieldType, Schema};

/// Validates candidate documents against a closed schema and produces
/// normalized records.
pub struct Validator {
    schema: Schema,
}

impl Validator {
    /// Creates a validator over the given schema.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// The schema this validator enforces.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validates a candidate document and returns the normalized record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` carrying one entry per failing field:
    /// `MissingField`, `TypeMismatch`, `NullNotAllowed`, or `UnknownField`.
    pub fn validate(&self, candidate: &Value) -> ValidationResult<AuditRecord> {
        let obj = candidate.as_object().ok_or_else(|| {
            ValidationErrors::single(ValidationError::TypeMismatch {
                field: "$root".into(),
                expected: "object",
                actual: json_type_name(candidate),
            })
        })?;

        let mut errors = Vec::new();

        // Closed schema: reject keys outside the declaration.
        for key in obj.keys() {
            if !self.schema.declares(key) {
                errors.push(ValidationError::UnknownField(key.clone()));
            }
        }

        // Walk declared fields in canonical order.
        for (name, def) in self.schema.iter() {
            match obj.get(name) {
                None => {
                    if def.required {
                        errors.push(ValidationError::MissingField(name.to_string()));
                    }
                }
                Some(Value::Null) => {
                    if !def.nullable {
                        errors.push(ValidationError::NullNotAllowed(name.to_string()));
                    }
                }
                Some(value) => {
                    if !matches_type(value, def.field_type) {
                        errors.push(ValidationError::TypeMismatch {
                            field: name.to_string(),
                            expected: def.field_type.type_name(),
                            actual: json_type_name(value),
                        });
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        Ok(AuditRecord::from_validated(obj))
    }
}

/// Exact type check; integers never accept floats or numeric strings.
fn matches_type(value: &Value, expected: FieldType) -> bool {
    match expected {
        FieldType::String => value.is_string(),
        FieldType::Integer => value.is_i64() || value.is_u64(),
        FieldType::Boolean => value.is_boolean(),
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
