use async_trait::async_trait;
use uuid::Uuid;

use crate::projects::models::{Project, ProjectFilter, ProjectSnapshot};
use helia_common::error::HeliaResult;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List non-deleted projects with optional filters.
    /// Returns the page plus the total matching row count.
    async fn list(&self, filter: ProjectFilter) -> HeliaResult<(Vec<Project>, i64)>;

    async fn get_by_id(&self, id: Uuid) -> HeliaResult<Option<Project>>;
    async fn create(&self, project: Project) -> HeliaResult<Project>;
    async fn update(&self, project: Project) -> HeliaResult<Project>;

    /// Soft delete: sets the deletion flag, actor and reason.
    /// The row stays in place and drops out of listings and scans.
    async fn soft_delete(&self, id: Uuid, actor: &str, reason: Option<&str>) -> HeliaResult<()>;

    async fn archive(&self, id: Uuid, actor: &str) -> HeliaResult<()>;

    /// Comparison snapshots for a duplicate scan: every project that is
    /// neither deleted nor archived, with its live-document count.
    async fn list_snapshots(&self) -> HeliaResult<Vec<ProjectSnapshot>>;
}
