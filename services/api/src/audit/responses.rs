use helia_db::audit::models::AuditLog;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListAuditResponse {
    pub data: Vec<AuditLog>,
    pub count: usize,
}
