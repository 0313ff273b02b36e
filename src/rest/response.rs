//! Response shapes for the audit endpoints.
//!
//! Bodies are assembled as `serde_json::Value` so object keys ride the
//! map's stable sorted order.

use serde::Serialize;
use serde_json::{json, Value};

use crate::store::{Page, StoredRecord};

/// Body of a successful create: assigned metadata plus the echoed
/// canonical fields.
pub fn created_body(record: &StoredRecord) -> Value {
    record.to_value()
}

/// Pagination metadata echoed with every list response.
#[derive(Debug, Clone, Serialize)]
pub struct ListMeta {
    /// Exact matching-record count; omitted in speed-optimized mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,

    /// 1-based page number served.
    pub page: usize,

    /// Page size applied after clamping.
    pub max_results: usize,
}

/// List response body: the item slice plus pagination metadata.
pub fn list_body(page: &Page, meta: ListMeta) -> Value {
    let items: Vec<Value> = page.items.iter().map(StoredRecord::to_value).collect();
    json!({
        "items": items,
        "meta": meta,
    })
}
