//! Record schema and validation for the audit collection.
//!
//! The schema is closed and static: a fixed set of declared fields with
//! exact type matching and explicit nullability. Candidates are validated
//! in full before anything is persisted.

mod errors;
mod record;
mod types;
mod validator;

pub use errors::{ValidationError, ValidationErrors, ValidationResult};
pub use record::{audit_schema, AuditRecord};
pub use types::{FieldDef, FieldType, Schema};
pub use validator::Validator;
