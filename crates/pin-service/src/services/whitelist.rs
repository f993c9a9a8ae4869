//! Whitelist administration
//!
//! List, add and remove whitelisted channels and toggle the pin notification.
//! Every operation requires a guild context and the manage capability; both
//! are checked before anything is read or written.

use pin_core::entities::mention;
use pin_core::{AuditAction, Capability, ChannelRef, DomainError, MemberRef, Snowflake};
use tracing::{debug, info, instrument, warn};

use super::changelog::ChangelogService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;
use super::settings::SettingsService;

/// Result of listing the whitelist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistListing {
    /// No whitelisted channel resolves in this guild
    Empty,
    /// Live whitelisted channels, in whitelist order
    Channels(Vec<ChannelRef>),
}

/// Result of the pin notification command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinNotificationState {
    pub enabled: bool,
    /// False when the command only reported the current value
    pub changed: bool,
}

/// Whitelist administration service
pub struct WhitelistAdmin<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WhitelistAdmin<'a> {
    /// Create a new WhitelistAdmin
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Guild context plus manage capability
    fn authorize(&self, invoker: &MemberRef, guild_id: Option<Snowflake>) -> ServiceResult<Snowflake> {
        let guild_id = guild_id.ok_or(DomainError::NotInGuild)?;
        PermissionService::new(self.ctx).require_capability(invoker, Capability::ReactionPinManage)?;
        Ok(guild_id)
    }

    /// List whitelisted channels that still exist in the guild
    ///
    /// Entries for deleted channels are skipped, not purged.
    #[instrument(skip(self, invoker), fields(user_id = %invoker.user_id))]
    pub async fn list(
        &self,
        invoker: &MemberRef,
        guild_id: Option<Snowflake>,
    ) -> ServiceResult<WhitelistListing> {
        let guild_id = self.authorize(invoker, guild_id)?;

        let mut channels = Vec::new();
        for entry in self.ctx.whitelist_repo().list_all().await? {
            match self.ctx.platform().find_channel(guild_id, entry.channel_id).await {
                Ok(Some(channel)) => channels.push(channel),
                Ok(None) => debug!(channel_id = %entry.channel_id, "Skipping stale whitelist entry"),
                Err(e) => {
                    warn!(channel_id = %entry.channel_id, error = %e, "Failed to resolve whitelisted channel");
                }
            }
        }

        if channels.is_empty() {
            Ok(WhitelistListing::Empty)
        } else {
            Ok(WhitelistListing::Channels(channels))
        }
    }

    /// Whitelist a live guild channel
    #[instrument(skip(self, invoker), fields(user_id = %invoker.user_id))]
    pub async fn add(
        &self,
        invoker: &MemberRef,
        guild_id: Option<Snowflake>,
        channel_id: Snowflake,
    ) -> ServiceResult<ChannelRef> {
        let guild_id = self.authorize(invoker, guild_id)?;

        let channel = self
            .ctx
            .platform()
            .find_channel(guild_id, channel_id)
            .await
            .map_err(DomainError::from)?
            .ok_or_else(|| {
                DomainError::invalid_argument(
                    "channel",
                    self.ctx.translations().f_channel_not_found(&channel_id.to_string()),
                )
            })?;

        if self.ctx.whitelist_repo().find(channel_id).await?.is_some() {
            return Err(DomainError::AlreadyWhitelisted(channel_id).into());
        }
        self.ctx.whitelist_repo().create(channel_id).await?;

        info!(channel_id = %channel_id, "Channel whitelisted");

        ChangelogService::new(self.ctx)
            .record(
                guild_id,
                invoker.user_id,
                AuditAction::ChannelWhitelisted,
                Some(channel_id),
                self.ctx
                    .translations()
                    .f_log_channel_whitelisted_rp(&channel.mention()),
            )
            .await;

        Ok(channel)
    }

    /// Remove a channel from the whitelist
    ///
    /// Works for channels that no longer exist, so stale entries can be cleaned up.
    #[instrument(skip(self, invoker), fields(user_id = %invoker.user_id))]
    pub async fn remove(
        &self,
        invoker: &MemberRef,
        guild_id: Option<Snowflake>,
        channel_id: Snowflake,
    ) -> ServiceResult<()> {
        let guild_id = self.authorize(invoker, guild_id)?;

        let entry = self
            .ctx
            .whitelist_repo()
            .find(channel_id)
            .await?
            .ok_or(DomainError::NotWhitelisted(channel_id))?;
        self.ctx.whitelist_repo().delete(&entry).await?;

        info!(channel_id = %channel_id, "Channel removed from whitelist");

        ChangelogService::new(self.ctx)
            .record(
                guild_id,
                invoker.user_id,
                AuditAction::ChannelRemoved,
                Some(channel_id),
                self.ctx
                    .translations()
                    .f_log_channel_removed_rp(&mention(channel_id)),
            )
            .await;

        Ok(())
    }

    /// Report or change whether pin notifications are kept
    #[instrument(skip(self, invoker), fields(user_id = %invoker.user_id))]
    pub async fn set_pin_notification(
        &self,
        invoker: &MemberRef,
        guild_id: Option<Snowflake>,
        enabled: Option<bool>,
    ) -> ServiceResult<PinNotificationState> {
        let guild_id = self.authorize(invoker, guild_id)?;
        let settings = SettingsService::new(self.ctx);

        let Some(enabled) = enabled else {
            return Ok(PinNotificationState {
                enabled: settings.pin_message_enabled().await?,
                changed: false,
            });
        };

        settings.set_pin_message_enabled(enabled).await?;
        info!(enabled, "Pin notification setting changed");

        let translations = self.ctx.translations();
        let (action, description) = if enabled {
            (AuditAction::PinMessagesEnabled, &translations.pin_messages_now_enabled)
        } else {
            (AuditAction::PinMessagesDisabled, &translations.pin_messages_now_disabled)
        };
        ChangelogService::new(self.ctx)
            .record(guild_id, invoker.user_id, action, None, description.clone())
            .await;

        Ok(PinNotificationState {
            enabled,
            changed: true,
        })
    }
}
