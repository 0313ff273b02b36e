//! List query shape: filter, sort, page.

use super::filter::FilterSet;
use super::record::StoredRecord;

/// Sort direction for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub ascending: bool,
}

impl SortKey {
    /// Ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }
}

/// Bounded page request.
///
/// `limit` is clamped to the store's configured maximum; an `offset` past
/// the end of the result set yields an empty page, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

/// A full list query over the audit collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    /// Predicates combined with AND; empty means no filtering.
    pub filter: FilterSet,

    /// Sort keys applied in order. Empty means the default sort
    /// (timestamp descending). The identifier is always the final
    /// tie-break, ascending, so ordering is deterministic.
    pub sort: Vec<SortKey>,

    /// Requested page slice.
    pub page: PageRequest,

    /// Whether to compute the exact matching-record count. Disabled in
    /// speed-optimized mode.
    pub exact_total: bool,
}

impl ListQuery {
    /// A query with no filter, default sort, and the given page.
    pub fn paged(offset: usize, limit: usize) -> Self {
        Self {
            filter: FilterSet::new(),
            sort: Vec::new(),
            page: PageRequest { offset, limit },
            exact_total: true,
        }
    }
}

/// A bounded slice of query results plus pagination metadata.
#[derive(Debug, Clone)]
pub struct Page {
    /// The record slice, in query order.
    pub items: Vec<StoredRecord>,

    /// Exact matching-record count; `None` in speed-optimized mode.
    pub total: Option<usize>,
}
