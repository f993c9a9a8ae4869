//! Audit entry <-> model mapper

use pin_core::entities::{AuditAction, AuditEntry};
use pin_core::error::DomainError;
use pin_core::value_objects::Snowflake;
use uuid::Uuid;

use crate::models::AuditLogModel;

/// Convert AuditLogModel to AuditEntry entity
///
/// Fails when the stored action name is unknown.
impl TryFrom<AuditLogModel> for AuditEntry {
    type Error = DomainError;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        let action = AuditAction::parse(&model.action).ok_or_else(|| {
            DomainError::DatabaseError(format!("Unknown audit action: {}", model.action))
        })?;

        Ok(AuditEntry {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            actor_id: Snowflake::new(model.actor_id),
            action,
            target_id: model.target_id.map(Snowflake::new),
            description: model.description,
            created_at: model.created_at,
        })
    }
}

/// Convert AuditEntry entity reference to values for database insertion
pub struct AuditLogInsert<'a> {
    pub id: Uuid,
    pub guild_id: i64,
    pub actor_id: i64,
    pub action: &'static str,
    pub target_id: Option<i64>,
    pub description: &'a str,
}

impl<'a> AuditLogInsert<'a> {
    pub fn new(entry: &'a AuditEntry) -> Self {
        Self {
            id: entry.id,
            guild_id: entry.guild_id.into_inner(),
            actor_id: entry.actor_id.into_inner(),
            action: entry.action.as_str(),
            target_id: entry.target_id.map(Snowflake::into_inner),
            description: &entry.description,
        }
    }
}
