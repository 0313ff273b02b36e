//! Field and schema type definitions for the audit schema.
//!
//! Supported primitive types:
//! - string: UTF-8 string
//! - integer: 64-bit signed integer
//! - boolean: Boolean
//!
//! A field may additionally be marked nullable (explicit null accepted in
//! place of a typed value) and required (key must be present).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supported primitive field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Integer,
    /// Boolean
    Boolean,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
        }
    }
}

/// Field definition: primitive type, required-ness, nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether the key must be present
    pub required: bool,
    /// Whether an explicit null is accepted in place of a typed value
    pub nullable: bool,
}

impl FieldDef {
    /// Create a required, non-nullable string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
            nullable: false,
        }
    }

    /// Create a required string field that accepts explicit null
    pub fn nullable_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
            nullable: true,
        }
    }

    /// Create a required integer field
    pub fn required_integer() -> Self {
        Self {
            field_type: FieldType::Integer,
            required: true,
            nullable: false,
        }
    }

    /// Create a required boolean field
    pub fn required_boolean() -> Self {
        Self {
            field_type: FieldType::Boolean,
            required: true,
            nullable: false,
        }
    }

    /// Create an optional field of the given type
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            nullable: false,
        }
    }
}

/// A closed schema: a named collection plus its declared fields.
///
/// The field map is ordered so iteration is deterministic and follows the
/// canonical (sorted) field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Collection name
    pub name: String,
    /// Field definitions in canonical order
    pub fields: BTreeMap<String, FieldDef>,
}

impl Schema {
    /// Create a new schema
    pub fn new(name: impl Into<String>, fields: BTreeMap<String, FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a declared field.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Whether the schema declares the given field.
    pub fn declares(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Declared fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Declared field names in canonical order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        let mut fields = BTreeMap::new();
        fields.insert("name".into(), FieldDef::required_string());
        fields.insert("age".into(), FieldDef::required_integer());
        fields.insert("note".into(), FieldDef::optional(FieldType::String));
        Schema::new("people", fields)
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Integer.type_name(), "integer");
        assert_eq!(FieldType::Boolean.type_name(), "boolean");
    }

    #[test]
    fn test_declares() {
        let schema = sample_schema();
        assert!(schema.declares("name"));
        assert!(schema.declares("age"));
        assert!(!schema.declares("unknown"));
    }

    #[test]
    fn test_iteration_is_canonical_order() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["age", "name", "note"]);
    }

    #[test]
    fn test_field_lookup() {
        let schema = sample_schema();
        let def = schema.field("age").unwrap();
        assert_eq!(def.field_type, FieldType::Integer);
        assert!(def.required);
        assert!(!def.nullable);

        let note = schema.field("note").unwrap();
        assert!(!note.required);
    }
}
