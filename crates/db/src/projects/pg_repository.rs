use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Postgres, QueryBuilder, Row, Transaction};
use uuid::Uuid;

use crate::projects::models::{Project, ProjectFilter, ProjectSnapshot};
use crate::projects::repositories::ProjectRepository;
use helia_common::error::{HeliaError, HeliaResult};

const PROJECT_COLUMNS: &str = "id, name, site_code, site_code_display, investor_id, \
     investor_code, intake_year, sequence, address, city, district, \
     capacity_kw::float8 as capacity_kw, status, archived, deleted_at, deleted_by, \
     delete_reason, created_at, updated_at";

#[derive(Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn map_project_row(row: PgRow) -> Project {
        Project {
            id: row.get("id"),
            name: row.get("name"),
            site_code: row.get("site_code"),
            site_code_display: row.get("site_code_display"),
            investor_id: row.get("investor_id"),
            investor_code: row.get("investor_code"),
            intake_year: row.get("intake_year"),
            sequence: row.get("sequence"),
            address: row.get("address"),
            city: row.get("city"),
            district: row.get("district"),
            capacity_kw: row.get("capacity_kw"),
            status: row.get("status"),
            archived: row.get("archived"),
            deleted_at: row.get("deleted_at"),
            deleted_by: row.get("deleted_by"),
            delete_reason: row.get("delete_reason"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &ProjectFilter) {
        qb.push(" where deleted_at is null");
        if filter.include_archived != Some(true) {
            qb.push(" and archived = false");
        }
        if let Some(ref status) = filter.status {
            qb.push(" and status = ").push_bind(status.clone());
        }
        if let Some(investor_id) = filter.investor_id {
            qb.push(" and investor_id = ").push_bind(investor_id);
        }
    }

    pub(crate) async fn append_audit(
        tx: &mut Transaction<'_, Postgres>,
        action: &str,
        record_id: Uuid,
        actor: &str,
        reason: Option<&str>,
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
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn list(&self, filter: ProjectFilter) -> HeliaResult<(Vec<Project>, i64)> {
        let mut count_qb = QueryBuilder::new("select count(*) from projects");
        Self::push_filters(&mut count_qb, &filter);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        let mut qb = QueryBuilder::new(format!("select {PROJECT_COLUMNS} from projects"));
        Self::push_filters(&mut qb, &filter);
        qb.push(" order by created_at desc");
        qb.push(" limit ").push_bind(filter.limit.unwrap_or(50));
        qb.push(" offset ").push_bind(filter.offset.unwrap_or(0));

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok((rows.into_iter().map(Self::map_project_row).collect(), total))
    }

    async fn get_by_id(&self, id: Uuid) -> HeliaResult<Option<Project>> {
        let sql =
            format!("select {PROJECT_COLUMNS} from projects where id = $1 and deleted_at is null");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(row.map(Self::map_project_row))
    }

    async fn create(&self, project: Project) -> HeliaResult<Project> {
        sqlx::query(
            "insert into projects
             (id, name, site_code, site_code_display, investor_id, investor_code,
              intake_year, sequence, address, city, district, capacity_kw, status,
              archived, created_at, updated_at)
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(&project.site_code)
        .bind(&project.site_code_display)
        .bind(project.investor_id)
        .bind(&project.investor_code)
        .bind(project.intake_year)
        .bind(project.sequence)
        .bind(&project.address)
        .bind(&project.city)
        .bind(&project.district)
        .bind(project.capacity_kw)
        .bind(&project.status)
        .bind(project.archived)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(project)
    }

    async fn update(&self, project: Project) -> HeliaResult<Project> {
        let result = sqlx::query(
            "update projects
             set name = $1, site_code = $2, site_code_display = $3, investor_id = $4,
                 investor_code = $5, intake_year = $6, sequence = $7, address = $8,
                 city = $9, district = $10, capacity_kw = $11, status = $12,
                 updated_at = $13
             where id = $14 and deleted_at is null",
        )
        .bind(&project.name)
        .bind(&project.site_code)
        .bind(&project.site_code_display)
        .bind(project.investor_id)
        .bind(&project.investor_code)
        .bind(project.intake_year)
        .bind(project.sequence)
        .bind(&project.address)
        .bind(&project.city)
        .bind(&project.district)
        .bind(project.capacity_kw)
        .bind(&project.status)
        .bind(project.updated_at)
        .bind(project.id)
        .execute(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(HeliaError::NotFound(format!(
                "active project not found: {}",
                project.id
            )));
        }

        Ok(project)
    }

    async fn soft_delete(&self, id: Uuid, actor: &str, reason: Option<&str>) -> HeliaResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        let now = Utc::now();
        let result = sqlx::query(
            "update projects
             set deleted_at = $1, deleted_by = $2, delete_reason = $3, updated_at = $1
             where id = $4 and deleted_at is null",
        )
        .bind(now)
        .bind(actor)
        .bind(reason)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(HeliaError::NotFound(format!("active project not found: {id}")));
        }

        Self::append_audit(&mut tx, "project_delete", id, actor, reason).await?;

        tx.commit()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(())
    }

    async fn archive(&self, id: Uuid, actor: &str) -> HeliaResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        let result = sqlx::query(
            "update projects set archived = true, updated_at = $1
             where id = $2 and deleted_at is null and archived = false",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(HeliaError::NotFound(format!(
                "active unarchived project not found: {id}"
            )));
        }

        Self::append_audit(&mut tx, "project_archive", id, actor, None).await?;

        tx.commit()
            .await
            .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(())
    }

    async fn list_snapshots(&self) -> HeliaResult<Vec<ProjectSnapshot>> {
        let rows = sqlx::query(
            "select p.id, p.name, p.site_code, p.site_code_display, p.investor_id,
                    p.investor_code, p.intake_year, p.sequence, p.address, p.city,
                    p.district, p.capacity_kw::float8 as capacity_kw, p.status,
                    p.created_at, count(d.id) as document_count
             from projects p
             left join documents d on d.project_id = p.id and d.deleted_at is null
             where p.deleted_at is null and p.archived = false
             group by p.id
             order by p.created_at asc",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| HeliaError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| ProjectSnapshot {
                id: row.get("id"),
                name: row.get("name"),
                site_code: row.get("site_code"),
                site_code_display: row.get("site_code_display"),
                investor_id: row.get("investor_id"),
                investor_code: row.get("investor_code"),
                intake_year: row.get("intake_year"),
                sequence: row.get("sequence"),
                address: row.get("address"),
                city: row.get("city"),
                district: row.get("district"),
                capacity_kw: row.get("capacity_kw"),
                status: row.get("status"),
                created_at: row.get("created_at"),
                document_count: row.get("document_count"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_pool;

    async fn test_repo() -> Option<(PgProjectRepository, PgPool)> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = create_pool(&url).await.expect("db should connect");
        Some((PgProjectRepository::new(pool.clone()), pool))
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

    async fn insert_document(pool: &PgPool, project_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "insert into documents (id, project_id, title, doc_type) \
             values ($1, $2, 'test-doc', 'permit')",
        )
        .bind(id)
        .bind(project_id)
        .execute(pool)
        .await
        .expect("insert document");
        id
    }

    #[tokio::test]
    async fn list_excludes_soft_deleted() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let id = insert_project(&pool, "Taoyuan Rooftop A").await;

        repo.soft_delete(id, "tester", Some("duplicate entry"))
            .await
            .expect("soft delete should succeed");

        let (projects, _total) = repo
            .list(ProjectFilter::default())
            .await
            .expect("list should succeed");
        assert!(projects.iter().all(|p| p.id != id));
    }

    #[tokio::test]
    async fn soft_delete_twice_returns_not_found() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let id = insert_project(&pool, "Hsinchu Ground B").await;

        repo.soft_delete(id, "tester", None)
            .await
            .expect("first delete should succeed");
        let result = repo.soft_delete(id, "tester", None).await;
        assert!(matches!(result, Err(HeliaError::NotFound(_))));
    }

    #[tokio::test]
    async fn soft_delete_writes_audit_row() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let id = insert_project(&pool, "Miaoli Carport C").await;

        repo.soft_delete(id, "tester", Some("decommissioned"))
            .await
            .expect("soft delete should succeed");

        let count: i64 = sqlx::query_scalar(
            "select count(*) from audit_logs where record_id = $1 and action = 'project_delete'",
        )
        .bind(id)
        .fetch_one(&pool)
        .await
        .expect("count audit rows");
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn snapshots_exclude_archived_and_count_documents() {
        let (repo, pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let kept = insert_project(&pool, "Changhua Fishery D").await;
        let archived = insert_project(&pool, "Changhua Fishery E").await;
        insert_document(&pool, kept).await;
        insert_document(&pool, kept).await;

        repo.archive(archived, "tester")
            .await
            .expect("archive should succeed");

        let snapshots = repo.list_snapshots().await.expect("snapshots should load");
        assert!(snapshots.iter().all(|s| s.id != archived));
        let snap = snapshots
            .iter()
            .find(|s| s.id == kept)
            .expect("kept project should be present");
        assert_eq!(snap.document_count, 2);
    }

    #[tokio::test]
    async fn update_missing_project_returns_not_found() {
        let (repo, _pool) = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let now = Utc::now();
        let ghost = Project {
            id: Uuid::new_v4(),
            name: "Ghost".to_string(),
            site_code: None,
            site_code_display: None,
            investor_id: None,
            investor_code: None,
            intake_year: None,
            sequence: None,
            address: None,
            city: None,
            district: None,
            capacity_kw: None,
            status: "planning".to_string(),
            archived: false,
            deleted_at: None,
            deleted_by: None,
            delete_reason: None,
            created_at: now,
            updated_at: now,
        };
        let result = repo.update(ghost).await;
        assert!(matches!(result, Err(HeliaError::NotFound(_))));
    }
}
