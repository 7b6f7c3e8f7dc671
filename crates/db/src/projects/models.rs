use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
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
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<String>,
    pub delete_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized read-only row used for duplicate comparison.
/// Refetched on every scan; includes the live-document count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
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
    pub created_at: DateTime<Utc>,
    pub document_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectFilter {
    pub status: Option<String>,
    pub investor_id: Option<Uuid>,
    pub include_archived: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
