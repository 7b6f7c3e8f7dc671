use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::audit::models::AuditLog;
use helia_common::error::{HeliaError, HeliaResult};

#[derive(Clone)]
pub struct PgAuditRepository {
    pool: PgPool,
}

impl PgAuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: PgRow) -> AuditLog {
        AuditLog {
            id: row.get("id"),
            action: row.get("action"),
            record_id: row.get("record_id"),
            actor: row.get("actor"),
            reason: row.get("reason"),
            created_at: row.get("created_at"),
        }
    }

    pub async fn create(
        &self,
        action: &str,
        record_id: Uuid,
        actor: &str,
        reason: Option<&str>,
    ) -> HeliaResult<AuditLog> {
        let entry = AuditLog {
            id: Uuid::new_v4(),
            action: action.to_owned(),
            record_id,
            actor: actor.to_owned(),
            reason: reason.map(|s| s.to_owned()),
            created_at: Utc::now(),
        };

        sqlx::query(
            "insert into audit_logs (id, action, record_id, actor, reason, created_at)
             values ($1, $2, $3, $4, $5, $6)",
        )
        .bind(entry.id)
        .bind(&entry.action)
        .bind(entry.record_id)
        .bind(&entry.actor)
        .bind(&entry.reason)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(entry)
    }

    pub async fn list_by_record(&self, record_id: Uuid) -> HeliaResult<Vec<AuditLog>> {
        let rows = sqlx::query(
            "select id, action, record_id, actor, reason, created_at
             from audit_logs where record_id = $1 order by created_at desc",
        )
        .bind(record_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    pub async fn list_recent(&self, limit: i64) -> HeliaResult<Vec<AuditLog>> {
        let rows = sqlx::query(
            "select id, action, record_id, actor, reason, created_at
             from audit_logs order by created_at desc limit $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }
}
