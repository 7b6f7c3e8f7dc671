use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct DismissRequest {
    pub project_ids: Vec<Uuid>,
    pub reason: Option<String>,
    pub reviewed_by: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub keep_id: Uuid,
    pub duplicate_id: Uuid,
    pub reason: Option<String>,
    pub reviewed_by: String,
}

#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    pub keep_id: Uuid,
    pub merge_id: Uuid,
    pub reassign_children: Option<bool>,
    pub reason: Option<String>,
    pub reviewed_by: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteReviewRequest {
    pub actor: String,
}
