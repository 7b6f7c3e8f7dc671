use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct InvestorResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub status: String,
    pub project_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ListInvestorsResponse {
    pub data: Vec<InvestorResponse>,
    pub count: usize,
}
