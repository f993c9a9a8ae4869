//! Service context - dependency container for services
//!
//! Holds the repositories, the chat platform, the permission subsystem and the
//! translation table needed by services.

use std::sync::Arc;

use pin_common::Translations;
use pin_core::traits::{
    AuditLogRepository, CapabilityChecker, ChatPlatform, SettingsRepository, WhitelistRepository,
};
use pin_core::Snowflake;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    whitelist_repo: Arc<dyn WhitelistRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,

    // External collaborators
    platform: Arc<dyn ChatPlatform>,
    capabilities: Arc<dyn CapabilityChecker>,

    translations: Arc<Translations>,
    bot_user_id: Snowflake,
    changelog_channel: Option<Snowflake>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the whitelist repository
    pub fn whitelist_repo(&self) -> &dyn WhitelistRepository {
        self.whitelist_repo.as_ref()
    }

    /// Get the settings repository
    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    // === External collaborators ===

    /// Get the chat platform action API
    pub fn platform(&self) -> &dyn ChatPlatform {
        self.platform.as_ref()
    }

    /// Get the permission subsystem
    pub fn capabilities(&self) -> &dyn CapabilityChecker {
        self.capabilities.as_ref()
    }

    // === Settings ===

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// The bot's own user id
    pub fn bot_user_id(&self) -> Snowflake {
        self.bot_user_id
    }

    /// Channel receiving changelog embeds, if configured
    pub fn changelog_channel(&self) -> Option<Snowflake> {
        self.changelog_channel
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("platform", &"dyn ChatPlatform")
            .field("bot_user_id", &self.bot_user_id)
            .field("changelog_channel", &self.changelog_channel)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    whitelist_repo: Option<Arc<dyn WhitelistRepository>>,
    settings_repo: Option<Arc<dyn SettingsRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    platform: Option<Arc<dyn ChatPlatform>>,
    capabilities: Option<Arc<dyn CapabilityChecker>>,
    translations: Option<Translations>,
    bot_user_id: Option<Snowflake>,
    changelog_channel: Option<Snowflake>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn whitelist_repo(mut self, repo: Arc<dyn WhitelistRepository>) -> Self {
        self.whitelist_repo = Some(repo);
        self
    }

    pub fn settings_repo(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn platform(mut self, platform: Arc<dyn ChatPlatform>) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn capabilities(mut self, checker: Arc<dyn CapabilityChecker>) -> Self {
        self.capabilities = Some(checker);
        self
    }

    /// Defaults to the English table
    pub fn translations(mut self, translations: Translations) -> Self {
        self.translations = Some(translations);
        self
    }

    pub fn bot_user_id(mut self, id: Snowflake) -> Self {
        self.bot_user_id = Some(id);
        self
    }

    pub fn changelog_channel(mut self, channel_id: Option<Snowflake>) -> Self {
        self.changelog_channel = channel_id;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            whitelist_repo: self
                .whitelist_repo
                .ok_or_else(|| ServiceError::validation("whitelist_repo is required"))?,
            settings_repo: self
                .settings_repo
                .ok_or_else(|| ServiceError::validation("settings_repo is required"))?,
            audit_repo: self
                .audit_repo
                .ok_or_else(|| ServiceError::validation("audit_repo is required"))?,
            platform: self
                .platform
                .ok_or_else(|| ServiceError::validation("platform is required"))?,
            capabilities: self
                .capabilities
                .ok_or_else(|| ServiceError::validation("capabilities is required"))?,
            translations: Arc::new(self.translations.unwrap_or_default()),
            bot_user_id: self
                .bot_user_id
                .ok_or_else(|| ServiceError::validation("bot_user_id is required"))?,
            changelog_channel: self.changelog_channel,
        })
    }
}
