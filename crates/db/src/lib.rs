pub mod audit;
pub mod dedup;
pub mod investors;
pub mod projects;

use helia_common::error::{HeliaError, HeliaResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a Postgres connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> HeliaResult<PgPool> {
    tracing::info!("connecting to database");
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))
}
