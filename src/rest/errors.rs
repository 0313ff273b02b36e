//! HTTP error mapping for the audit endpoints.
//!
//! Validation failures and bad parameters become 400s with structured
//! bodies; store faults map to 503/409; anything else is an opaque 500
//! carrying only a correlation reference.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::schema::ValidationErrors;
use crate::store::StoreError;

/// Result type for endpoint handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the audit endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Candidate document failed schema validation.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// Invalid query parameter (sort, where, page, max_results).
    #[error("invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Record not found.
    #[error("record not found")]
    NotFound,

    /// Store failure.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Unexpected internal fault; details go to the log only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::InvalidFilter(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::InvalidSort(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body for this error.
    ///
    /// Server faults never echo their cause; they carry an opaque
    /// reference that is also written to the log.
    fn body(&self) -> Value {
        match self {
            ApiError::Validation(errors) => {
                let entries: Vec<Value> = errors
                    .errors()
                    .iter()
                    .map(|e| {
                        json!({
                            "field": e.field(),
                            "kind": e.kind(),
                            "message": e.to_string(),
                        })
                    })
                    .collect();
                json!({ "errors": entries })
            }
            ApiError::Store(StoreError::Unavailable(_)) => {
                let reference = Uuid::new_v4();
                tracing::error!(%reference, error = %self, "store unavailable");
                json!({ "error": "store unavailable", "reference": reference })
            }
            ApiError::Internal(_) => {
                let reference = Uuid::new_v4();
                tracing::error!(%reference, error = %self, "internal error");
                json!({ "error": "internal error", "reference": reference })
            }
            other => json!({ "error": other.to_string() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.body();
        (status, Json(body)).into_response()
    }
}
