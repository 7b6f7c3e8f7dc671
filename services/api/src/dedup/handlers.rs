use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use helia_common::error::HeliaError;
use helia_db::dedup::models::ReviewFilter;
use helia_db::dedup::repositories::DuplicateReviewRepository;
use helia_db::projects::repositories::ProjectRepository;
use uuid::Uuid;

use crate::dedup::formatters::format_reviews_csv;
use crate::dedup::requests::{ConfirmRequest, DeleteReviewRequest, DismissRequest, MergeRequest};
use crate::dedup::responses::{
    DismissResponse, ListReviewsResponse, MergeResponse, MutationResponse, ReviewStatsResponse,
    ScanResponse,
};
use crate::error::ApiError;
use crate::AppState;

fn validate_reviewed_by(reviewed_by: &str) -> Result<(), HeliaError> {
    if reviewed_by.trim().is_empty() {
        return Err(HeliaError::Validation(
            "reviewed_by must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_filter(filter: &ReviewFilter) -> Result<(), HeliaError> {
    if let Some(limit) = filter.limit {
        if limit < 1 {
            return Err(HeliaError::Validation("limit must be positive".to_string()));
        }
    }
    if let Some(offset) = filter.offset {
        if offset < 0 {
            return Err(HeliaError::Validation(
                "offset must not be negative".to_string(),
            ));
        }
    }
    Ok(())
}

/// Run a full duplicate scan: fetch comparison snapshots and the
/// reviewed-pair skip set, compare every remaining pair, return the
/// grouped candidates. Nothing is persisted.
pub async fn run_scan(State(state): State<AppState>) -> Result<Json<ScanResponse>, ApiError> {
    let snapshots = state.project_repo.list_snapshots().await?;
    let reviewed = state.dedup_repo.reviewed_pairs().await?;

    let outcome = helia_dedup::scan(&state.dedup_config, &snapshots, &reviewed);
    tracing::info!(
        projects = outcome.stats.projects_scanned,
        pairs = outcome.stats.pairs_compared,
        skipped = outcome.stats.pairs_skipped_reviewed,
        groups = outcome.groups.len(),
        "duplicate scan completed"
    );

    Ok(Json(ScanResponse {
        groups: outcome.groups,
        stats: outcome.stats,
    }))
}

pub async fn dismiss_pairs(
    State(state): State<AppState>,
    Json(body): Json<DismissRequest>,
) -> Result<Json<DismissResponse>, ApiError> {
    validate_reviewed_by(&body.reviewed_by)?;
    if body.project_ids.len() < 2 {
        return Err(ApiError(HeliaError::Validation(
            "project_ids must contain at least two projects".to_string(),
        )));
    }

    let pairs_recorded = state
        .dedup_repo
        .dismiss_pairs(&body.project_ids, body.reason.as_deref(), &body.reviewed_by)
        .await?;

    Ok(Json(DismissResponse { pairs_recorded }))
}

pub async fn confirm_duplicate(
    State(state): State<AppState>,
    Json(body): Json<ConfirmRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    validate_reviewed_by(&body.reviewed_by)?;
    state
        .dedup_repo
        .confirm_duplicate(
            body.keep_id,
            body.duplicate_id,
            body.reason.as_deref(),
            &body.reviewed_by,
        )
        .await?;
    Ok(Json(MutationResponse { ok: true }))
}

pub async fn merge_projects(
    State(state): State<AppState>,
    Json(body): Json<MergeRequest>,
) -> Result<Json<MergeResponse>, ApiError> {
    validate_reviewed_by(&body.reviewed_by)?;
    let outcome = state
        .dedup_repo
        .merge_projects(
            body.keep_id,
            body.merge_id,
            body.reassign_children.unwrap_or(true),
            body.reason.as_deref(),
            &body.reviewed_by,
        )
        .await?;

    Ok(Json(MergeResponse {
        ok: true,
        documents_moved: outcome.documents_moved,
        history_moved: outcome.history_moved,
    }))
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Query(filter): Query<ReviewFilter>,
) -> Result<Json<ListReviewsResponse>, ApiError> {
    validate_filter(&filter)?;
    let data = state.dedup_repo.list_reviews(filter).await?;
    let count = data.len();
    Ok(Json(ListReviewsResponse { data, count }))
}

pub async fn review_stats(
    State(state): State<AppState>,
) -> Result<Json<ReviewStatsResponse>, ApiError> {
    let stats = state.dedup_repo.review_stats().await?;
    Ok(Json(ReviewStatsResponse {
        total: stats.total,
        dismissed: stats.dismissed,
        confirmed: stats.confirmed,
        merged: stats.merged,
        latest_reviewed_at: stats.latest_reviewed_at,
    }))
}

pub async fn export_reviews_csv(
    State(state): State<AppState>,
    Query(filter): Query<ReviewFilter>,
) -> Result<impl IntoResponse, ApiError> {
    validate_filter(&filter)?;
    let data = state.dedup_repo.list_reviews(filter).await?;
    let csv = format_reviews_csv(&data);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"duplicate-reviews.csv\"",
            ),
        ],
        csv,
    ))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DeleteReviewRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    if body.actor.trim().is_empty() {
        return Err(ApiError(HeliaError::Validation(
            "actor must not be empty".to_string(),
        )));
    }
    state.dedup_repo.delete_review(id, &body.actor).await?;
    Ok(Json(MutationResponse { ok: true }))
}
