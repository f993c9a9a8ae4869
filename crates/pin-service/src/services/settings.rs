//! Settings service
//!
//! Typed access to the process-wide key/value settings. Every call reads the
//! store, so an admin change is visible to the very next decision.

use pin_core::{DomainError, SettingKey, Snowflake};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Settings service
pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    /// Create a new SettingsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Read a setting, falling back to `default` when unset
    #[instrument(skip(self, default))]
    pub async fn get<T: DeserializeOwned>(&self, key: SettingKey, default: T) -> ServiceResult<T> {
        let Some(raw) = self.ctx.settings_repo().get_raw(key.as_str()).await? else {
            return Ok(default);
        };

        serde_json::from_value(raw).map_err(|e| {
            DomainError::SettingDecode {
                key: key.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Persist a setting
    #[instrument(skip(self, value))]
    pub async fn set<T: Serialize>(&self, key: SettingKey, value: &T) -> ServiceResult<()> {
        let raw = serde_json::to_value(value).map_err(|e| DomainError::SettingDecode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.ctx.settings_repo().set_raw(key.as_str(), raw).await?;
        debug!(key = %key, "Setting updated");
        Ok(())
    }

    /// Role barring its holders from self-pinning
    pub async fn mute_role(&self) -> ServiceResult<Option<Snowflake>> {
        self.get(SettingKey::MUTE_ROLE, None).await
    }

    pub async fn set_mute_role(&self, role_id: Option<Snowflake>) -> ServiceResult<()> {
        self.set(SettingKey::MUTE_ROLE, &role_id).await
    }

    /// Whether the platform's "pinned a message" notification is kept
    pub async fn pin_message_enabled(&self) -> ServiceResult<bool> {
        self.get(SettingKey::PIN_MESSAGE, true).await
    }

    pub async fn set_pin_message_enabled(&self, enabled: bool) -> ServiceResult<()> {
        self.set(SettingKey::PIN_MESSAGE, &enabled).await
    }
}
