use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
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
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
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
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteProjectRequest {
    pub actor: String,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArchiveProjectRequest {
    pub actor: String,
}
