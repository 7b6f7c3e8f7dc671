use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub site_code: Option<String>,
    pub site_code_display: Option<String>,
    pub investor_id: Option<Uuid>,
    pub investor_code: Option<String>,
    pub intake_year: Option<i32>,
    pub sequence: Option<i32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub capacity_kw: Option<f64>,
    pub status: String,
    pub archived: bool,
    pub document_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    pub data: Vec<ProjectResponse>,
    pub count: usize,
    pub total: i64,
}
