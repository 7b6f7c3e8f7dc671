use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::investors::models::Investor;
use helia_common::error::{HeliaError, HeliaResult};

#[derive(Clone)]
pub struct PgInvestorRepository {
    pool: PgPool,
}

impl PgInvestorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: PgRow) -> Investor {
        Investor {
            id: row.get("id"),
            code: row.get("code"),
            name: row.get("name"),
            status: row.get("status"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    pub async fn list(&self) -> HeliaResult<Vec<Investor>> {
        let rows = sqlx::query(
            "select id, code, name, status, created_at, updated_at
             from investors where status = 'active' order by code asc",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> HeliaResult<Option<Investor>> {
        let row = sqlx::query(
            "select id, code, name, status, created_at, updated_at
             from investors where id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(row.map(Self::map_row))
    }

    pub async fn create(&self, investor: Investor) -> HeliaResult<Investor> {
        sqlx::query(
            "insert into investors (id, code, name, status, created_at, updated_at)
             values ($1, $2, $3, $4, $5, $6)",
        )
        .bind(investor.id)
        .bind(&investor.code)
        .bind(&investor.name)
        .bind(&investor.status)
        .bind(investor.created_at)
        .bind(investor.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                HeliaError::Validation(format!("investor code already exists: {}", investor.code))
            } else {
                HeliaError::Database(msg)
            }
        })?;

        Ok(investor)
    }

    /// Live (non-deleted, non-archived) projects linked to this investor.
    pub async fn project_count(&self, investor_id: Uuid) -> HeliaResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "select count(*) from projects
             where investor_id = $1 and deleted_at is null and archived = false",
        )
        .bind(investor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_pool;
    use chrono::Utc;

    async fn test_repo() -> Option<(PgInvestorRepository, PgPool)> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = create_pool(&url).await.expect("db should connect");
        Some((PgInvestorRepository::new(pool.clone()), pool))
    }

    fn make_investor(code: &str) -> Investor {
        let now = Utc::now();
        Investor {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: format!("{code} Energy Co."),
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_then_get_by_id() {
        let (repo, _pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let code = format!("INV{}", &Uuid::new_v4().simple().to_string()[..8]);
        let investor = make_investor(&code);
        let id = investor.id;

        repo.create(investor).await.expect("create should succeed");

        let fetched = repo
            .get_by_id(id)
            .await
            .expect("get should succeed")
            .expect("investor should exist");
        assert_eq!(fetched.code, code);
    }

    #[tokio::test]
    async fn duplicate_code_rejected() {
        let (repo, _pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let code = format!("INV{}", &Uuid::new_v4().simple().to_string()[..8]);

        repo.create(make_investor(&code))
            .await
            .expect("first create should succeed");
        let result = repo.create(make_investor(&code)).await;
        assert!(matches!(result, Err(HeliaError::Validation(_))));
    }

    #[tokio::test]
    async fn project_count_is_zero_for_unlinked_investor() {
        let (repo, _pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let count = repo
            .project_count(Uuid::new_v4())
            .await
            .expect("count should succeed");
        assert_eq!(count, 0);
    }
}
