//! PostgreSQL implementation of SettingsRepository

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::instrument;

use pin_core::traits::{RepoResult, SettingsRepository};

use crate::models::SettingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SettingsRepository
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    /// Create a new PgSettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip(self))]
    async fn get_raw(&self, key: &str) -> RepoResult<Option<JsonValue>> {
        let result = sqlx::query_as::<_, SettingModel>(
            r"
            SELECT key, value, updated_at
            FROM settings
            WHERE key = $1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|model| model.value))
    }

    #[instrument(skip(self, value))]
    async fn set_raw(&self, key: &str, value: JsonValue) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = NOW()
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
