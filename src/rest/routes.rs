//! Audit resource endpoints.
//!
//! - `POST /audit`: validate then insert; 201 with the stored record.
//! - `GET /audit`: filtered, sorted, paginated listing.
//! - `GET /audit/:id`: item lookup by assigned identifier (read-only).
//!
//! No update or delete routes exist; stored records are immutable.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::schema::Validator;
use crate::settings::Settings;
use crate::store::{AuditStore, ListQuery, PageRequest};

use super::errors::{ApiError, ApiResult};
use super::parser::parse_list_params;
use super::response::{created_body, list_body, ListMeta};

/// Shared state for the audit endpoints.
pub struct AppState {
    pub validator: Validator,
    pub store: Arc<dyn AuditStore>,
    pub settings: Settings,
}

/// Builds the audit resource router.
pub fn audit_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/audit", get(list_records).post(create_record))
        .route("/audit/:id", get(get_record))
        .with_state(state)
}

/// Liveness probe.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// `POST /audit`
async fn create_record(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let record = state.validator.validate(&body)?;
    let stored = state.store.insert(record)?;

    tracing::debug!(id = %stored.id, "audit record created");
    Ok((StatusCode::CREATED, Json(created_body(&stored))))
}

/// `GET /audit`
async fn list_records(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Value>> {
    let (filter, sort, page) =
        parse_list_params(&params, state.settings.pagination_default)?;

    // Clamp before computing the offset so page boundaries stay aligned
    // with the slice the store returns.
    let max_results = page.max_results.min(state.settings.pagination_limit);

    let query = ListQuery {
        filter,
        sort,
        page: PageRequest {
            // Saturates so an absurd page number lands past the end and
            // yields an empty page instead of overflowing.
            offset: (page.page - 1).saturating_mul(max_results),
            limit: max_results,
        },
        exact_total: !state.settings.optimize_pagination_for_speed,
    };

    let result = state.store.list(&query)?;
    let meta = ListMeta {
        total: result.total,
        page: page.page,
        max_results,
    };

    Ok(Json(list_body(&result, meta)))
}

/// `GET /audit/:id`
async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let stored = state.store.get(&id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(stored.to_value()))
}
