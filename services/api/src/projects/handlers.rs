use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use helia_common::error::HeliaError;
use helia_db::projects::models::{Project, ProjectFilter};
use helia_db::projects::repositories::ProjectRepository;
use sqlx::Row;
use uuid::Uuid;

use crate::error::ApiError;
use crate::projects::requests::{
    ArchiveProjectRequest, CreateProjectRequest, DeleteProjectRequest, UpdateProjectRequest,
};
use crate::projects::responses::{ListProjectsResponse, ProjectResponse};
use crate::AppState;

fn validate_actor(actor: &str) -> Result<(), HeliaError> {
    if actor.trim().is_empty() {
        return Err(HeliaError::Validation("actor must not be empty".to_string()));
    }
    Ok(())
}

async fn document_count_for_project(pool: &sqlx::PgPool, project_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "select count(*) from documents where project_id = $1 and deleted_at is null",
    )
    .bind(project_id)
    .fetch_one(pool)
    .await
    .unwrap_or(0)
}

async fn document_counts_for_projects(
    pool: &sqlx::PgPool,
    project_ids: &[Uuid],
) -> std::collections::HashMap<Uuid, i64> {
    if project_ids.is_empty() {
        return std::collections::HashMap::new();
    }
    let rows = sqlx::query(
        "select project_id, count(*) as cnt from documents \
         where project_id = any($1) and deleted_at is null \
         group by project_id",
    )
    .bind(project_ids)
    .fetch_all(pool)
    .await
    .unwrap_or_default();

    rows.into_iter()
        .map(|r| {
            let pid: Uuid = r.get("project_id");
            let cnt: i64 = r.get("cnt");
            (pid, cnt)
        })
        .collect()
}

fn to_project_response(project: Project, document_count: i64) -> ProjectResponse {
    ProjectResponse {
        id: project.id,
        name: project.name,
        site_code: project.site_code,
        site_code_display: project.site_code_display,
        investor_id: project.investor_id,
        investor_code: project.investor_code,
        intake_year: project.intake_year,
        sequence: project.sequence,
        address: project.address,
        city: project.city,
        district: project.district,
        capacity_kw: project.capacity_kw,
        status: project.status,
        archived: project.archived,
        document_count,
        created_at: project.created_at,
        updated_at: project.updated_at,
    }
}

// ── Handlers ────────────────────────────────────────────────────

pub async fn list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Result<Json<ListProjectsResponse>, ApiError> {
    let (projects, total) = state.project_repo.list(filter).await?;
    let pool = state.project_repo.pool();
    let project_ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();
    let counts = document_counts_for_projects(pool, &project_ids).await;

    let data: Vec<ProjectResponse> = projects
        .into_iter()
        .map(|p| {
            let count = counts.get(&p.id).copied().unwrap_or(0);
            to_project_response(p, count)
        })
        .collect();

    let count = data.len();
    Ok(Json(ListProjectsResponse { data, count, total }))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .project_repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError(HeliaError::NotFound(format!("project not found: {id}"))))?;

    let count = document_count_for_project(state.project_repo.pool(), id).await;
    Ok(Json(to_project_response(project, count)))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError(HeliaError::Validation(
            "name must not be empty".to_string(),
        )));
    }

    let now = chrono::Utc::now();
    let project = Project {
        id: Uuid::new_v4(),
        name: body.name,
        site_code: body.site_code,
        site_code_display: body.site_code_display,
        investor_id: body.investor_id,
        investor_code: body.investor_code,
        intake_year: body.intake_year,
        sequence: body.sequence,
        address: body.address,
        city: body.city,
        district: body.district,
        capacity_kw: body.capacity_kw,
        status: body.status.unwrap_or_else(|| "planning".to_string()),
        archived: false,
        deleted_at: None,
        deleted_by: None,
        delete_reason: None,
        created_at: now,
        updated_at: now,
    };

    let created = state.project_repo.create(project).await?;
    let resp = to_project_response(created, 0);
    Ok((StatusCode::CREATED, Json(resp)))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let existing = state
        .project_repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError(HeliaError::NotFound(format!("project not found: {id}"))))?;

    let name = body.name.unwrap_or(existing.name);
    if name.trim().is_empty() {
        return Err(ApiError(HeliaError::Validation(
            "name must not be empty".to_string(),
        )));
    }

    let project = Project {
        id,
        name,
        site_code: body.site_code.or(existing.site_code),
        site_code_display: body.site_code_display.or(existing.site_code_display),
        investor_id: body.investor_id.or(existing.investor_id),
        investor_code: body.investor_code.or(existing.investor_code),
        intake_year: body.intake_year.or(existing.intake_year),
        sequence: body.sequence.or(existing.sequence),
        address: body.address.or(existing.address),
        city: body.city.or(existing.city),
        district: body.district.or(existing.district),
        capacity_kw: body.capacity_kw.or(existing.capacity_kw),
        status: body.status.unwrap_or(existing.status),
        archived: existing.archived,
        deleted_at: existing.deleted_at,
        deleted_by: existing.deleted_by,
        delete_reason: existing.delete_reason,
        created_at: existing.created_at,
        updated_at: chrono::Utc::now(),
    };

    let updated = state.project_repo.update(project).await?;
    let count = document_count_for_project(state.project_repo.pool(), id).await;
    Ok(Json(to_project_response(updated, count)))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DeleteProjectRequest>,
) -> Result<StatusCode, ApiError> {
    validate_actor(&body.actor)?;
    state
        .project_repo
        .soft_delete(id, &body.actor, body.reason.as_deref())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn archive_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ArchiveProjectRequest>,
) -> Result<StatusCode, ApiError> {
    validate_actor(&body.actor)?;
    state.project_repo.archive(id, &body.actor).await?;
    Ok(StatusCode::NO_CONTENT)
}
