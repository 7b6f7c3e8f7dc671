use std::collections::HashSet;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Postgres, QueryBuilder, Row, Transaction};
use uuid::Uuid;

use crate::dedup::models::{
    pair_key, DuplicateReview, MergeOutcome, ReviewDecision, ReviewFilter, ReviewStats,
};
use crate::dedup::repositories::DuplicateReviewRepository;
use helia_common::error::{HeliaError, HeliaResult};

#[derive(Clone)]
pub struct PgDedupRepository {
    pool: PgPool,
}

impl PgDedupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn map_review_row(row: PgRow) -> HeliaResult<DuplicateReview> {
        let decision_raw: String = row.get("decision");
        let decision = ReviewDecision::from_str(&decision_raw).map_err(HeliaError::Internal)?;

        Ok(DuplicateReview {
            id: row.get("id"),
            project_a_id: row.get("project_a_id"),
            project_b_id: row.get("project_b_id"),
            decision,
            reason: row.get("reason"),
            reviewed_by: row.get("reviewed_by"),
            reviewed_at: row.get("reviewed_at"),
            created_at: row.get("created_at"),
        })
    }

    /// Audit-trail reason with the convention prefix downstream log
    /// filters key on.
    fn audit_reason(prefix: &str, reason: Option<&str>) -> String {
        match reason {
            Some(r) if !r.trim().is_empty() => format!("{prefix}: {r}"),
            _ => format!("{prefix}:"),
        }
    }

    async fn append_audit(
        tx: &mut Transaction<'_, Postgres>,
        action: &str,
        record_id: Uuid,
        actor: &str,
        reason: &str,
    ) -> HeliaResult<()> {
        sqlx::query(
            "insert into audit_logs (id, action, record_id, actor, reason, created_at)
             values ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::new_v4())
        .bind(action)
        .bind(record_id)
        .bind(actor)
        .bind(reason)
        .bind(Utc::now())
        .execute(&mut **tx)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(())
    }

    async fn require_active_project(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> HeliaResult<()> {
        let row = sqlx::query("select 1 from projects where id = $1 and deleted_at is null")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        if row.is_none() {
            return Err(HeliaError::NotFound(format!("active project not found: {id}")));
        }
        Ok(())
    }

    async fn soft_delete_project(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        actor: &str,
        reason: &str,
    ) -> HeliaResult<()> {
        let result = sqlx::query(
            "update projects
             set deleted_at = $1, deleted_by = $2, delete_reason = $3, updated_at = $1
             where id = $4 and deleted_at is null",
        )
        .bind(Utc::now())
        .bind(actor)
        .bind(reason)
        .bind(id)
        .execute(&mut **tx)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(HeliaError::NotFound(format!("active project not found: {id}")));
        }
        Ok(())
    }

    async fn insert_review(
        tx: &mut Transaction<'_, Postgres>,
        a: Uuid,
        b: Uuid,
        decision: ReviewDecision,
        reason: Option<&str>,
        actor: &str,
    ) -> HeliaResult<()> {
        let (first, second) = pair_key(a, b);
        sqlx::query(
            "insert into duplicate_reviews
             (id, project_a_id, project_b_id, decision, reason, reviewed_by, reviewed_at, created_at)
             values ($1, $2, $3, $4, $5, $6, $7, $7)",
        )
        .bind(Uuid::new_v4())
        .bind(first)
        .bind(second)
        .bind(decision.as_str())
        .bind(reason)
        .bind(actor)
        .bind(Utc::now())
        .execute(&mut **tx)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl DuplicateReviewRepository for PgDedupRepository {
    async fn reviewed_pairs(&self) -> HeliaResult<Vec<(Uuid, Uuid)>> {
        let rows = sqlx::query("select project_a_id, project_b_id from duplicate_reviews")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| (r.get("project_a_id"), r.get("project_b_id")))
            .collect())
    }

    async fn list_reviews(&self, filter: ReviewFilter) -> HeliaResult<Vec<DuplicateReview>> {
        let mut qb = QueryBuilder::new(
            "select id, project_a_id, project_b_id, decision, reason, reviewed_by, \
             reviewed_at, created_at from duplicate_reviews where true",
        );

        if let Some(decision) = filter.decision {
            qb.push(" and decision = ").push_bind(decision.as_str());
        }

        qb.push(" order by reviewed_at desc");
        qb.push(" limit ").push_bind(filter.limit.unwrap_or(50));
        qb.push(" offset ").push_bind(filter.offset.unwrap_or(0));

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        rows.into_iter().map(Self::map_review_row).collect()
    }

    async fn dismiss_pairs(
        &self,
        project_ids: &[Uuid],
        reason: Option<&str>,
        actor: &str,
    ) -> HeliaResult<usize> {
        let mut seen = HashSet::new();
        let distinct: Vec<Uuid> = project_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        if distinct.len() < 2 {
            return Err(HeliaError::Validation(
                "dismiss requires at least two distinct project ids".to_string(),
            ));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        let now = Utc::now();
        let mut written = 0usize;

        for i in 0..distinct.len() {
            for j in (i + 1)..distinct.len() {
                let (a, b) = pair_key(distinct[i], distinct[j]);
                sqlx::query(
                    "insert into duplicate_reviews
                     (id, project_a_id, project_b_id, decision, reason, reviewed_by, reviewed_at, created_at)
                     values ($1, $2, $3, 'dismissed', $4, $5, $6, $6)
                     on conflict (project_a_id, project_b_id)
                     do update set decision = 'dismissed', reason = excluded.reason,
                                   reviewed_by = excluded.reviewed_by,
                                   reviewed_at = excluded.reviewed_at",
                )
                .bind(Uuid::new_v4())
                .bind(a)
                .bind(b)
                .bind(reason)
                .bind(actor)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(|e| HeliaError::Database(e.to_string()))?;

                let detail = match reason {
                    Some(r) => format!("pair {a}/{b}: {r}"),
                    None => format!("pair {a}/{b}"),
                };
                let audit_reason = Self::audit_reason("DEDUP_DISMISS", Some(detail.as_str()));
                Self::append_audit(&mut tx, "dedup_dismiss", a, actor, &audit_reason).await?;
                written += 1;
            }
        }

        tx.commit()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(written)
    }

    async fn confirm_duplicate(
        &self,
        keep_id: Uuid,
        duplicate_id: Uuid,
        reason: Option<&str>,
        actor: &str,
    ) -> HeliaResult<()> {
        if keep_id == duplicate_id {
            return Err(HeliaError::Validation(
                "keep and duplicate must be different projects".to_string(),
            ));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Self::require_active_project(&mut tx, keep_id).await?;

        let delete_reason = match reason {
            Some(r) => format!("duplicate of {keep_id}: {r}"),
            None => format!("duplicate of {keep_id}"),
        };
        Self::soft_delete_project(&mut tx, duplicate_id, actor, &delete_reason).await?;

        Self::insert_review(
            &mut tx,
            keep_id,
            duplicate_id,
            ReviewDecision::Confirmed,
            reason,
            actor,
        )
        .await?;

        let audit_reason = Self::audit_reason("DEDUP_CONFIRM", reason);
        Self::append_audit(&mut tx, "dedup_confirm", duplicate_id, actor, &audit_reason).await?;

        tx.commit()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(())
    }

    async fn merge_projects(
        &self,
        keep_id: Uuid,
        merge_id: Uuid,
        reassign_children: bool,
        reason: Option<&str>,
        actor: &str,
    ) -> HeliaResult<MergeOutcome> {
        if keep_id == merge_id {
            return Err(HeliaError::Validation(
                "keep and merge must be different projects".to_string(),
            ));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Self::require_active_project(&mut tx, keep_id).await?;
        Self::require_active_project(&mut tx, merge_id).await?;

        let mut outcome = MergeOutcome {
            documents_moved: 0,
            history_moved: 0,
        };

        if reassign_children {
            let docs = sqlx::query(
                "update documents set project_id = $1, updated_at = $2
                 where project_id = $3 and deleted_at is null",
            )
            .bind(keep_id)
            .bind(Utc::now())
            .bind(merge_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;
            outcome.documents_moved = docs.rows_affected();

            let history = sqlx::query(
                "update project_status_history set project_id = $1 where project_id = $2",
            )
            .bind(keep_id)
            .bind(merge_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;
            outcome.history_moved = history.rows_affected();
        }

        let delete_reason = match reason {
            Some(r) => format!("merged into {keep_id}: {r}"),
            None => format!("merged into {keep_id}"),
        };
        Self::soft_delete_project(&mut tx, merge_id, actor, &delete_reason).await?;

        Self::insert_review(
            &mut tx,
            keep_id,
            merge_id,
            ReviewDecision::Merged,
            reason,
            actor,
        )
        .await?;

        let audit_reason = Self::audit_reason("DEDUP_MERGE", reason);
        Self::append_audit(&mut tx, "dedup_merge", merge_id, actor, &audit_reason).await?;

        tx.commit()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(outcome)
    }

    async fn delete_review(&self, id: Uuid, actor: &str) -> HeliaResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        let row = sqlx::query(
            "select project_a_id, project_b_id from duplicate_reviews where id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        let (a, b): (Uuid, Uuid) = match row {
            Some(r) => (r.get("project_a_id"), r.get("project_b_id")),
            None => return Err(HeliaError::NotFound(format!("review not found: {id}"))),
        };

        sqlx::query("delete from duplicate_reviews where id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        let detail = format!("pair {a}/{b} re-enabled");
        let audit_reason = Self::audit_reason("DEDUP_REOPEN", Some(detail.as_str()));
        Self::append_audit(&mut tx, "dedup_review_delete", a, actor, &audit_reason).await?;

        tx.commit()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(())
    }

    async fn review_stats(&self) -> HeliaResult<ReviewStats> {
        let row = sqlx::query(
            "select count(*) as total,
                    count(*) filter (where decision = 'dismissed') as dismissed,
                    count(*) filter (where decision = 'confirmed') as confirmed,
                    count(*) filter (where decision = 'merged') as merged,
                    max(reviewed_at) as latest_reviewed_at
             from duplicate_reviews",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(ReviewStats {
            total: row.get("total"),
            dismissed: row.get("dismissed"),
            confirmed: row.get("confirmed"),
            merged: row.get("merged"),
            latest_reviewed_at: row.get("latest_reviewed_at"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_pool;

    async fn test_repo() -> Option<(PgDedupRepository, PgPool)> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = create_pool(&url).await.expect("db should connect");
        Some((PgDedupRepository::new(pool.clone()), pool))
    }

    async fn insert_project(pool: &PgPool, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query("insert into projects (id, name, status) values ($1, $2, 'planning')")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await
            .expect("insert project");
        id
    }

    async fn insert_document(pool: &PgPool, project_id: Uuid) {
        sqlx::query(
            "insert into documents (id, project_id, title, doc_type) \
             values ($1, $2, 'test-doc', 'permit')",
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .execute(pool)
        .await
        .expect("insert document");
    }

    async fn insert_history(pool: &PgPool, project_id: Uuid) {
        sqlx::query(
            "insert into project_status_history (id, project_id, status, changed_by) \
             values ($1, $2, 'planning', 'tester')",
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .execute(pool)
        .await
        .expect("insert status history");
    }

    async fn review_rows_for(pool: &PgPool, ids: &[Uuid]) -> i64 {
        sqlx::query_scalar::<_, i64>(
            "select count(*) from duplicate_reviews \
             where project_a_id = any($1) and project_b_id = any($1)",
        )
        .bind(ids)
        .fetch_one(pool)
        .await
        .expect("count review rows")
    }

    async fn is_soft_deleted(pool: &PgPool, id: Uuid) -> bool {
        let deleted_at: Option<chrono::DateTime<Utc>> =
            sqlx::query_scalar("select deleted_at from projects where id = $1")
                .bind(id)
                .fetch_one(pool)
                .await
                .expect("fetch deleted_at");
        deleted_at.is_some()
    }

    // ── dismiss_pairs ────────────────────────────────────────────

    #[tokio::test]
    async fn dismiss_three_projects_writes_three_pair_rows() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let ids = [
            insert_project(&pool, "Site A").await,
            insert_project(&pool, "Site B").await,
            insert_project(&pool, "Site C").await,
        ];

        let written = repo
            .dismiss_pairs(&ids, Some("different rooftops"), "reviewer")
            .await
            .expect("dismiss should succeed");

        assert_eq!(written, 3);
        assert_eq!(review_rows_for(&pool, &ids).await, 3);
    }

    #[tokio::test]
    async fn dismiss_is_idempotent_via_upsert() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let ids = [
            insert_project(&pool, "Site D").await,
            insert_project(&pool, "Site E").await,
        ];

        repo.dismiss_pairs(&ids, None, "first-reviewer")
            .await
            .expect("first dismiss should succeed");
        repo.dismiss_pairs(&ids, Some("checked again"), "second-reviewer")
            .await
            .expect("second dismiss should succeed");

        assert_eq!(review_rows_for(&pool, &ids).await, 1);

        let row = sqlx::query(
            "select reviewed_by, reason from duplicate_reviews \
             where project_a_id = any($1) and project_b_id = any($1)",
        )
        .bind(&ids[..])
        .fetch_one(&pool)
        .await
        .expect("fetch review row");
        let reviewed_by: String = row.get("reviewed_by");
        assert_eq!(reviewed_by, "second-reviewer");
    }

    #[tokio::test]
    async fn dismiss_normalizes_pair_order() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let p1 = insert_project(&pool, "Site F").await;
        let p2 = insert_project(&pool, "Site G").await;
        let (expected_a, expected_b) = pair_key(p1, p2);

        // Deliberately pass in reverse key order
        repo.dismiss_pairs(&[expected_b, expected_a], None, "reviewer")
            .await
            .expect("dismiss should succeed");

        let row = sqlx::query(
            "select project_a_id, project_b_id from duplicate_reviews \
             where project_a_id = $1 and project_b_id = $2",
        )
        .bind(expected_a)
        .bind(expected_b)
        .fetch_optional(&pool)
        .await
        .expect("fetch review row");
        assert!(row.is_some());
    }

    #[tokio::test]
    async fn dismiss_rejects_fewer_than_two_distinct_ids() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let id = insert_project(&pool, "Site H").await;

        let result = repo.dismiss_pairs(&[id, id], None, "reviewer").await;
        assert!(matches!(result, Err(HeliaError::Validation(_))));
    }

    #[tokio::test]
    async fn dismiss_writes_prefixed_audit_rows() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let ids = [
            insert_project(&pool, "Site I").await,
            insert_project(&pool, "Site J").await,
        ];

        repo.dismiss_pairs(&ids, Some("neighbouring lots"), "reviewer")
            .await
            .expect("dismiss should succeed");

        let reasons: Vec<String> = sqlx::query_scalar(
            "select reason from audit_logs where action = 'dedup_dismiss' and record_id = any($1)",
        )
        .bind(&ids[..])
        .fetch_all(&pool)
        .await
        .expect("fetch audit reasons");
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].starts_with("DEDUP_DISMISS:"));
        assert!(reasons[0].contains("neighbouring lots"));
    }

    // ── confirm_duplicate ────────────────────────────────────────

    #[tokio::test]
    async fn confirm_soft_deletes_exactly_one_and_writes_one_review_row() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let keep = insert_project(&pool, "Site K").await;
        let duplicate = insert_project(&pool, "Site K copy").await;

        repo.confirm_duplicate(keep, duplicate, Some("double intake"), "reviewer")
            .await
            .expect("confirm should succeed");

        assert!(!is_soft_deleted(&pool, keep).await);
        assert!(is_soft_deleted(&pool, duplicate).await);
        assert_eq!(review_rows_for(&pool, &[keep, duplicate]).await, 1);

        let decision: String = sqlx::query_scalar(
            "select decision from duplicate_reviews \
             where project_a_id = any($1) and project_b_id = any($1)",
        )
        .bind(&[keep, duplicate][..])
        .fetch_one(&pool)
        .await
        .expect("fetch decision");
        assert_eq!(decision, "confirmed");
    }

    #[tokio::test]
    async fn confirm_missing_duplicate_returns_not_found() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let keep = insert_project(&pool, "Site L").await;

        let result = repo
            .confirm_duplicate(keep, Uuid::new_v4(), None, "reviewer")
            .await;
        assert!(matches!(result, Err(HeliaError::NotFound(_))));
    }

    #[tokio::test]
    async fn confirm_same_project_rejected() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let id = insert_project(&pool, "Site M").await;

        let result = repo.confirm_duplicate(id, id, None, "reviewer").await;
        assert!(matches!(result, Err(HeliaError::Validation(_))));
    }

    // ── merge_projects ───────────────────────────────────────────

    #[tokio::test]
    async fn merge_reassigns_children_and_soft_deletes() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let keep = insert_project(&pool, "Site N").await;
        let merge = insert_project(&pool, "Site N copy").await;
        insert_document(&pool, merge).await;
        insert_document(&pool, merge).await;
        insert_history(&pool, merge).await;

        let outcome = repo
            .merge_projects(keep, merge, true, Some("same site"), "reviewer")
            .await
            .expect("merge should succeed");

        assert_eq!(outcome.documents_moved, 2);
        assert_eq!(outcome.history_moved, 1);
        assert!(is_soft_deleted(&pool, merge).await);
        assert!(!is_soft_deleted(&pool, keep).await);

        let doc_count: i64 =
            sqlx::query_scalar("select count(*) from documents where project_id = $1")
                .bind(keep)
                .fetch_one(&pool)
                .await
                .expect("count documents");
        assert_eq!(doc_count, 2);

        let decision: String = sqlx::query_scalar(
            "select decision from duplicate_reviews \
             where project_a_id = any($1) and project_b_id = any($1)",
        )
        .bind(&[keep, merge][..])
        .fetch_one(&pool)
        .await
        .expect("fetch decision");
        assert_eq!(decision, "merged");
    }

    #[tokio::test]
    async fn merge_without_reassign_leaves_children_in_place() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let keep = insert_project(&pool, "Site O").await;
        let merge = insert_project(&pool, "Site O copy").await;
        insert_document(&pool, merge).await;

        let outcome = repo
            .merge_projects(keep, merge, false, None, "reviewer")
            .await
            .expect("merge should succeed");

        assert_eq!(outcome.documents_moved, 0);
        let doc_count: i64 =
            sqlx::query_scalar("select count(*) from documents where project_id = $1")
                .bind(merge)
                .fetch_one(&pool)
                .await
                .expect("count documents");
        assert_eq!(doc_count, 1);
    }

    #[tokio::test]
    async fn merge_missing_project_returns_not_found() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let keep = insert_project(&pool, "Site P").await;

        let result = repo
            .merge_projects(keep, Uuid::new_v4(), true, None, "reviewer")
            .await;
        assert!(matches!(result, Err(HeliaError::NotFound(_))));
    }

    // ── delete_review / stats ────────────────────────────────────

    #[tokio::test]
    async fn delete_review_reopens_pair() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let ids = [
            insert_project(&pool, "Site Q").await,
            insert_project(&pool, "Site R").await,
        ];
        repo.dismiss_pairs(&ids, None, "reviewer")
            .await
            .expect("dismiss should succeed");

        let review_id: Uuid = sqlx::query_scalar(
            "select id from duplicate_reviews \
             where project_a_id = any($1) and project_b_id = any($1)",
        )
        .bind(&ids[..])
        .fetch_one(&pool)
        .await
        .expect("fetch review id");

        repo.delete_review(review_id, "admin")
            .await
            .expect("delete should succeed");

        assert_eq!(review_rows_for(&pool, &ids).await, 0);
    }

    #[tokio::test]
    async fn delete_missing_review_returns_not_found() {
        let (repo, _pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let result = repo.delete_review(Uuid::new_v4(), "admin").await;
        assert!(matches!(result, Err(HeliaError::NotFound(_))));
    }

    #[tokio::test]
    async fn review_stats_counts_by_decision() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let a = insert_project(&pool, "Site S").await;
        let b = insert_project(&pool, "Site T").await;
        repo.dismiss_pairs(&[a, b], None, "reviewer")
            .await
            .expect("dismiss should succeed");

        let stats = repo.review_stats().await.expect("stats should load");
        assert!(stats.total >= 1);
        assert!(stats.dismissed >= 1);
        assert!(stats.latest_reviewed_at.is_some());
    }
}
