use async_trait::async_trait;
use uuid::Uuid;

use crate::dedup::models::{DuplicateReview, MergeOutcome, ReviewFilter, ReviewStats};
use helia_common::error::HeliaResult;

#[async_trait]
pub trait DuplicateReviewRepository: Send + Sync {
    /// All recorded pair keys, for the scanner's skip set.
    async fn reviewed_pairs(&self) -> HeliaResult<Vec<(Uuid, Uuid)>>;

    async fn list_reviews(&self, filter: ReviewFilter) -> HeliaResult<Vec<DuplicateReview>>;

    /// Record every pairwise combination of the given projects as
    /// dismissed (not duplicates). N projects produce C(N,2) rows.
    /// Upserts on the normalized pair key, so re-dismissing is a no-op
    /// beyond refreshing reviewer and reason.
    async fn dismiss_pairs(
        &self,
        project_ids: &[Uuid],
        reason: Option<&str>,
        actor: &str,
    ) -> HeliaResult<usize>;

    /// Soft-delete the duplicate project and record a single confirmed
    /// review row for the kept/deleted pair.
    async fn confirm_duplicate(
        &self,
        keep_id: Uuid,
        duplicate_id: Uuid,
        reason: Option<&str>,
        actor: &str,
    ) -> HeliaResult<()>;

    /// Reassign the merged project's live documents and status history
    /// to the kept project (when requested), soft-delete the merged
    /// project, and record a merged review row. Runs in one transaction.
    async fn merge_projects(
        &self,
        keep_id: Uuid,
        merge_id: Uuid,
        reassign_children: bool,
        reason: Option<&str>,
        actor: &str,
    ) -> HeliaResult<MergeOutcome>;

    /// Remove a review record, re-enabling the pair for future scans.
    async fn delete_review(&self, id: Uuid, actor: &str) -> HeliaResult<()>;

    async fn review_stats(&self) -> HeliaResult<ReviewStats>;
}
