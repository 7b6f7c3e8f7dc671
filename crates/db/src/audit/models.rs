use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub action: String,
    pub record_id: Uuid,
    pub actor: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
