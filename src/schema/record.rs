//! The audit record: the one entity this service stores and serves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{FieldDef, Schema};

/// A validated audit event.
///
/// Fields are declared in canonical (sorted) order. `email`, `session_id`
/// and `user` are nullable in the schema and map to `Option`; all nine
/// fields are required on create, so `None` always means an explicit null
/// was supplied, never an absent key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Email attached to the audited session, if known.
    pub email: Option<String>,

    /// Protocol the audited request was sent over.
    pub protocol: String,

    /// Free-text justification for the outcome.
    pub reason: String,

    /// The resource the audited action targeted.
    pub resource: String,

    /// Outcome of the audited action.
    pub result: String,

    /// ID of the session attached to the request, if available.
    pub session_id: Option<String>,

    /// Unix epoch seconds the audited event occurred.
    pub timestamp: i64,

    /// User attached to the request, if available.
    pub user: Option<String>,

    /// Whether the request matched a whitelist entry.
    pub whitelisted: bool,
}

impl AuditRecord {
    /// Builds a record from an object that has already passed validation.
    ///
    /// Callers must only reach this through the validator; the accessors
    /// fall back to defaults rather than panicking on shape mismatches.
    pub(crate) fn from_validated(obj: &Map<String, Value>) -> Self {
        Self {
            email: opt_string(obj, "email"),
            protocol: req_string(obj, "protocol"),
            reason: req_string(obj, "reason"),
            resource: req_string(obj, "resource"),
            result: req_string(obj, "result"),
            session_id: opt_string(obj, "session_id"),
            timestamp: obj.get("timestamp").and_then(Value::as_i64).unwrap_or_default(),
            user: opt_string(obj, "user"),
            whitelisted: obj
                .get("whitelisted")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }
}

fn req_string(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// The audit collection schema.
///
/// Nine fields, all required; `email`, `session_id` and `user` accept
/// explicit null. This is the only schema the service serves; extending it
/// here is the sole schema-evolution mechanism.
pub fn audit_schema() -> Schema {
    let mut fields = BTreeMap::new();
    fields.insert("email".into(), FieldDef::nullable_string());
    fields.insert("protocol".into(), FieldDef::required_string());
    fields.insert("reason".into(), FieldDef::required_string());
    fields.insert("resource".into(), FieldDef::required_string());
    fields.insert("result".into(), FieldDef::required_string());
    fields.insert("session_id".into(), FieldDef::nullable_string());
    fields.insert("timestamp".into(), FieldDef::required_integer());
    fields.insert("user".into(), FieldDef::nullable_string());
    fields.insert("whitelisted".into(), FieldDef::required_boolean());
    Schema::new("audit", fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_audit_schema_declares_all_fields() {
        let schema = audit_schema();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(
            names,
            vec![
                "email",
                "protocol",
                "reason",
                "resource",
                "result",
                "session_id",
                "timestamp",
                "user",
                "whitelisted"
            ]
        );
    }

    #[test]
    fn test_nullable_flags() {
        let schema = audit_schema();
        assert!(schema.field("email").unwrap().nullable);
        assert!(schema.field("session_id").unwrap().nullable);
        assert!(schema.field("user").unwrap().nullable);
        assert!(!schema.field("protocol").unwrap().nullable);
        assert!(!schema.field("timestamp").unwrap().nullable);
        assert!(!schema.field("whitelisted").unwrap().nullable);
    }

    #[test]
    fn test_all_fields_required() {
        let schema = audit_schema();
        assert!(schema.iter().all(|(_, def)| def.required));
    }

    #[test]
    fn test_from_validated_maps_nulls_to_none() {
        let doc = json!({
            "email": null,
            "protocol": "ldap",
            "reason": "scheduled-audit",
            "resource": "/secrets",
            "result": "denied",
            "session_id": null,
            "timestamp": 1700000000,
            "user": "alice",
            "whitelisted": false
        });

        let record = AuditRecord::from_validated(doc.as_object().unwrap());
        assert_eq!(record.email, None);
        assert_eq!(record.protocol, "ldap");
        assert_eq!(record.session_id, None);
        assert_eq!(record.timestamp, 1700000000);
        assert_eq!(record.user.as_deref(), Some("alice"));
        assert!(!record.whitelisted);
    }

    #[test]
    fn test_serialized_keys_are_sorted() {
        let doc = json!({
            "email": "a@b.c",
            "protocol": "https",
            "reason": "allowed",
            "resource": "/",
            "result": "allow",
            "session_id": "s1",
            "timestamp": 1,
            "user": "u",
            "whitelisted": true
        });
        let record = AuditRecord::from_validated(doc.as_object().unwrap());

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
