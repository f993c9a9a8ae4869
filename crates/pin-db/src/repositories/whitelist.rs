//! PostgreSQL implementation of WhitelistRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pin_core::entities::WhitelistEntry;
use pin_core::error::DomainError;
use pin_core::traits::{RepoResult, WhitelistRepository};
use pin_core::value_objects::Snowflake;

use crate::models::WhitelistChannelModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of WhitelistRepository
#[derive(Clone)]
pub struct PgWhitelistRepository {
    pool: PgPool,
}

impl PgWhitelistRepository {
    /// Create a new PgWhitelistRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WhitelistRepository for PgWhitelistRepository {
    #[instrument(skip(self))]
    async fn find(&self, channel_id: Snowflake) -> RepoResult<Option<WhitelistEntry>> {
        let result = sqlx::query_as::<_, WhitelistChannelModel>(
            r"
            SELECT channel_id, created_at
            FROM reactionpin_channels
            WHERE channel_id = $1
            ",
        )
        .bind(channel_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(WhitelistEntry::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<WhitelistEntry>> {
        let results = sqlx::query_as::<_, WhitelistChannelModel>(
            r"
            SELECT channel_id, created_at
            FROM reactionpin_channels
            ORDER BY created_at, channel_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(WhitelistEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, channel_id: Snowflake) -> RepoResult<WhitelistEntry> {
        let result = sqlx::query(
            r"
            INSERT INTO reactionpin_channels (channel_id, created_at)
            VALUES ($1, NOW())
            ON CONFLICT (channel_id) DO NOTHING
            ",
        )
        .bind(channel_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyWhitelisted(channel_id)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AlreadyWhitelisted(channel_id));
        }

        Ok(WhitelistEntry::new(channel_id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, entry: &WhitelistEntry) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM reactionpin_channels
            WHERE channel_id = $1
            ",
        )
        .bind(entry.channel_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotWhitelisted(entry.channel_id));
        }

        Ok(())
    }
}
