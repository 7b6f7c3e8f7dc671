use chrono::{DateTime, Utc};
use helia_db::dedup::models::DuplicateReview;
use helia_dedup::{DuplicateGroup, ScanStats};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub groups: Vec<DuplicateGroup>,
    pub stats: ScanStats,
}

#[derive(Debug, Serialize)]
pub struct DismissResponse {
    pub pairs_recorded: usize,
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct MergeResponse {
    pub ok: bool,
    pub documents_moved: u64,
    pub history_moved: u64,
}

#[derive(Debug, Serialize)]
pub struct ListReviewsResponse {
    pub data: Vec<DuplicateReview>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ReviewStatsResponse {
    pub total: i64,
    pub dismissed: i64,
    pub confirmed: i64,
    pub merged: i64,
    pub latest_reviewed_at: Option<DateTime<Utc>>,
}
