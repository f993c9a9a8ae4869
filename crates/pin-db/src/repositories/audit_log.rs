//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pin_core::entities::AuditEntry;
use pin_core::traits::{AuditLogRepository, RepoResult};
use pin_core::value_objects::Snowflake;

use crate::mappers::AuditLogInsert;
use crate::models::AuditLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry), fields(action = entry.action.as_str()))]
    async fn record(&self, entry: &AuditEntry) -> RepoResult<()> {
        let insert = AuditLogInsert::new(entry);

        sqlx::query(
            r"
            INSERT INTO audit_logs (id, guild_id, actor_id, action, target_id, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(insert.id)
        .bind(insert.guild_id)
        .bind(insert.actor_id)
        .bind(insert.action)
        .bind(insert.target_id)
        .bind(insert.description)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_guild(&self, guild_id: Snowflake, limit: i64) -> RepoResult<Vec<AuditEntry>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, guild_id, actor_id, action, target_id, description, created_at
            FROM audit_logs
            WHERE guild_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(guild_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(AuditEntry::try_from).collect()
    }
}
