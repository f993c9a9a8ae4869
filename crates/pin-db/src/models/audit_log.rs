//! Audit log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub actor_id: i64,
    /// Audit action stored as its snake_case name
    pub action: String,
    pub target_id: Option<i64>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
