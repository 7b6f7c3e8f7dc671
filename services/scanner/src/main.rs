mod scan;

use helia_config::{init_tracing, AppConfig};
use helia_dedup::DedupConfig;

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    tracing::info!(service = "helia-scanner", "starting");

    let pool = helia_db::create_pool(&config.database_url)
        .await
        .expect("failed to connect to database");

    let dedup_config = DedupConfig::default();

    match scan::run_scan(&pool, &dedup_config).await {
        Ok(outcome) => {
            tracing::info!(
                projects = outcome.stats.projects_scanned,
                pairs_compared = outcome.stats.pairs_compared,
                skipped_reviewed = outcome.stats.pairs_skipped_reviewed,
                excluded = outcome.stats.pairs_excluded,
                high = outcome.stats.high_groups,
                medium = outcome.stats.medium_groups,
                low = outcome.stats.low_groups,
                "duplicate scan completed"
            );

            for group in &outcome.groups {
                let names: Vec<&str> =
                    group.projects.iter().map(|p| p.name.as_str()).collect();
                tracing::info!(
                    confidence = group.confidence.as_str(),
                    projects = ?names,
                    criteria = ?group
                        .criteria
                        .iter()
                        .filter(|c| c.matched)
                        .map(|c| c.rule.as_str())
                        .collect::<Vec<_>>(),
                    "candidate duplicate group"
                );
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "duplicate scan failed");
        }
    }

    tracing::info!("scanner finished");
}
