//! In-process document store for audit records.
//!
//! Records are append-only: the audit collection exposes no update or
//! delete operations, so the store holds a growing, immutable sequence.
//! Interior synchronization is a single RwLock; per-record consistency is
//! all the service requires.

use std::cmp::Ordering;
use std::sync::RwLock;

use serde_json::Value;

use crate::schema::{AuditRecord, Schema};

use super::errors::{StoreError, StoreResult};
use super::filter::{compare_values, FilterAllowList, FilterSet};
use super::query::{ListQuery, Page, SortKey};
use super::record::{RecordId, StoredRecord};

/// Hard cap on page size when none is configured.
pub const DEFAULT_MAX_LIMIT: usize = 50;

/// Server-assigned fields that are sortable alongside the declared ones.
const METADATA_SORT_FIELDS: [&str; 2] = ["created", "id"];

/// Persistence operations for the audit collection.
pub trait AuditStore: Send + Sync {
    /// Persists a validated record, assigning identifier and creation
    /// timestamp, and returns the stored form.
    fn insert(&self, record: AuditRecord) -> StoreResult<StoredRecord>;

    /// Looks up a record by its assigned identifier.
    fn get(&self, id: &RecordId) -> StoreResult<Option<StoredRecord>>;

    /// Returns records matching the query's filter, in the query's sort
    /// order, sliced to the requested page, with total-count metadata.
    fn list(&self, query: &ListQuery) -> StoreResult<Page>;
}

/// In-process `AuditStore` backed by an RwLock-guarded vector.
pub struct MemoryStore {
    schema: Schema,
    allow_list: FilterAllowList,
    validate_filters: bool,
    max_limit: usize,
    records: RwLock<Vec<StoredRecord>>,
}

impl MemoryStore {
    /// Store with default policies: every declared field filterable,
    /// filters validated, default page cap.
    pub fn new(schema: Schema) -> Self {
        Self::with_policy(schema, FilterAllowList::All, true, DEFAULT_MAX_LIMIT)
    }

    /// Store with explicit filter and pagination policies.
    pub fn with_policy(
        schema: Schema,
        allow_list: FilterAllowList,
        validate_filters: bool,
        max_limit: usize,
    ) -> Self {
        Self {
            schema,
            allow_list,
            validate_filters,
            max_limit,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Rejects filters over undeclared or disallowed fields.
    fn check_filters(&self, filter: &FilterSet) -> StoreResult<()> {
        if !self.validate_filters || filter.is_empty() {
            return Ok(());
        }

        if self.allow_list.is_disabled() {
            return Err(StoreError::InvalidFilter(
                "the filter system is disabled".into(),
            ));
        }

        for field in filter.fields() {
            if !self.schema.declares(field) {
                return Err(StoreError::InvalidFilter(format!(
                    "undeclared field '{}'",
                    field
                )));
            }
            if !self.allow_list.permits(field) {
                return Err(StoreError::InvalidFilter(format!(
                    "field '{}' is not filterable",
                    field
                )));
            }
        }

        Ok(())
    }

    /// Rejects sort keys over fields the collection does not carry.
    fn check_sort(&self, keys: &[SortKey]) -> StoreResult<()> {
        for key in keys {
            if !self.schema.declares(&key.field)
                && !METADATA_SORT_FIELDS.contains(&key.field.as_str())
            {
                return Err(StoreError::InvalidSort(format!(
                    "undeclared field '{}'",
                    key.field
                )));
            }
        }
        Ok(())
    }
}

impl AuditStore for MemoryStore {
    fn insert(&self, record: AuditRecord) -> StoreResult<StoredRecord> {
        let stored = StoredRecord::new(record);

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))?;

        // Identifier uniqueness; a collision would be a Conflict.
        if records.iter().any(|r| r.id == stored.id) {
            return Err(StoreError::Conflict(stored.id.to_string()));
        }

        records.push(stored.clone());
        Ok(stored)
    }

    fn get(&self, id: &RecordId) -> StoreResult<Option<StoredRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))?;

        Ok(records.iter().find(|r| &r.id == id).cloned())
    }

    fn list(&self, query: &ListQuery) -> StoreResult<Page> {
        self.check_filters(&query.filter)?;
        self.check_sort(&query.sort)?;

        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))?;

        let mut matched: Vec<(Value, StoredRecord)> = records
            .iter()
            .map(|r| (r.to_value(), r.clone()))
            .filter(|(doc, _)| query.filter.matches(doc))
            .collect();

        sort_matched(&mut matched, &query.sort);

        let total = if query.exact_total {
            Some(matched.len())
        } else {
            None
        };

        let limit = query.page.limit.min(self.max_limit);
        let items = matched
            .into_iter()
            .skip(query.page.offset)
            .take(limit)
            .map(|(_, record)| record)
            .collect();

        Ok(Page { items, total })
    }
}

/// Sorts matched records by the given keys, defaulting to timestamp
/// descending, with the identifier as the final ascending tie-break.
fn sort_matched(matched: &mut [(Value, StoredRecord)], keys: &[SortKey]) {
    let default_sort = [SortKey::desc("timestamp")];
    let keys: &[SortKey] = if keys.is_empty() { &default_sort } else { keys };

    matched.sort_by(|(a_doc, a), (b_doc, b)| {
        for key in keys {
            let a_val = a_doc.get(&key.field).unwrap_or(&Value::Null);
            let b_val = b_doc.get(&key.field).unwrap_or(&Value::Null);

            let cmp = compare_values(a_val, b_val).unwrap_or(Ordering::Equal);
            let cmp = if key.ascending { cmp } else { cmp.reverse() };
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        a.id.cmp(&b.id)
    });
}
