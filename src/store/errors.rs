//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by the store adapter.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing store cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A uniqueness constraint was violated. Not expected under the
    /// current schema; reserved for future unique indexes.
    #[error("conflict on record '{0}'")]
    Conflict(String),

    /// A filter references an undeclared or disallowed field, or the
    /// filter system is disabled.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// A sort key references a field the collection does not carry.
    #[error("invalid sort: {0}")]
    InvalidSort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_cause() {
        let err = StoreError::InvalidFilter("field 'extra' is not filterable".into());
        assert!(format!("{}", err).contains("extra"));

        let err = StoreError::Unavailable("connection refused".into());
        assert!(format!("{}", err).starts_with("store unavailable"));
    }
}
