//! Store adapter: persistence for validated audit records.
//!
//! Owns no business logic beyond translating list requests (filter, sort,
//! page) into storage operations and back. Ordering is deterministic:
//! timestamp descending by default with a stable identifier tie-break.

mod errors;
mod filter;
mod memory;
mod query;
mod record;

pub use errors::{StoreError, StoreResult};
pub use filter::{FilterAllowList, FilterExpr, FilterOp, FilterSet};
pub use memory::{AuditStore, MemoryStore, DEFAULT_MAX_LIMIT};
pub use query::{ListQuery, Page, PageRequest, SortKey};
pub use record::{RecordId, StoredRecord};
