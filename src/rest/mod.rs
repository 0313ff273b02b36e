//! REST surface for the audit resource.
//!
//! Routes, query parsing, response shapes, and HTTP error mapping. The
//! handlers stay thin: validate, delegate to the store, shape the body.

mod errors;
mod parser;
mod response;
mod routes;

pub use errors::{ApiError, ApiResult};
pub use parser::{parse_list_params, PageParams};
pub use response::{created_body, list_body, ListMeta};
pub use routes::{audit_routes, health_routes, AppState};
