use axum::extract::{Path, Query, State};
use axum::Json;
use helia_common::error::HeliaError;
use serde::Deserialize;
use uuid::Uuid;

use crate::audit::responses::ListAuditResponse;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

pub async fn list_by_record(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
) -> Result<Json<ListAuditResponse>, ApiError> {
    let data = state.audit_repo.list_by_record(record_id).await?;
    let count = data.len();
    Ok(Json(ListAuditResponse { data, count }))
}

pub async fn list_recent(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<ListAuditResponse>, ApiError> {
    let limit = query.limit.unwrap_or(50);
    if limit < 1 {
        return Err(ApiError(HeliaError::Validation(
            "limit must be positive".to_string(),
        )));
    }
    let data = state.audit_repo.list_recent(limit).await?;
    let count = data.len();
    Ok(Json(ListAuditResponse { data, count }))
}
