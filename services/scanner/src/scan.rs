use helia_db::dedup::pg_repository::PgDedupRepository;
use helia_db::dedup::repositories::DuplicateReviewRepository;
use helia_db::projects::pg_repository::PgProjectRepository;
use helia_db::projects::repositories::ProjectRepository;
use helia_dedup::{DedupConfig, ScanOutcome};
use sqlx::PgPool;

/// Fetch comparison snapshots and the reviewed-pair skip set, then run
/// one full in-memory scan. Nothing is written back; resolution is an
/// operator action taken through the API.
pub async fn run_scan(pool: &PgPool, config: &DedupConfig) -> anyhow::Result<ScanOutcome> {
    let project_repo = PgProjectRepository::new(pool.clone());
    let dedup_repo = PgDedupRepository::new(pool.clone());

    let snapshots = project_repo.list_snapshots().await?;
    let reviewed = dedup_repo.reviewed_pairs().await?;

    tracing::info!(
        projects = snapshots.len(),
        reviewed_pairs = reviewed.len(),
        "starting duplicate scan"
    );

    Ok(helia_dedup::scan(config, &snapshots, &reviewed))
}
