//! Stored record shape: domain fields plus server-assigned metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::schema::AuditRecord;

/// Server-assigned record identifier.
pub type RecordId = Uuid;

/// A persisted audit record: the validated domain fields plus the
/// identifier and creation timestamp assigned at insert time.
///
/// `created` is store-managed metadata and distinct from the record's
/// semantic `timestamp` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Unique identifier assigned at insert time.
    pub id: RecordId,

    /// Creation timestamp assigned at insert time.
    pub created: DateTime<Utc>,

    /// The validated domain fields.
    #[serde(flatten)]
    pub record: AuditRecord,
}

impl StoredRecord {
    /// Wraps a validated record with fresh metadata.
    pub fn new(record: AuditRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            created: Utc::now(),
            record,
        }
    }

    /// JSON form used for filter matching, sorting, and responses.
    ///
    /// Keys come out in stable sorted order because serde_json maps are
    /// ordered.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
