//! Command service - runs `reactionpin` subcommands
//!
//! The group requires a guild context and the manage capability; both are
//! checked before the subcommand is parsed.

use pin_core::{Capability, DomainError};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;
use super::whitelist::{WhitelistAdmin, WhitelistListing};
use crate::commands::ReactionPinCommand;
use crate::dto::{CommandReply, CommandRequest};

/// Command service
pub struct CommandService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommandService<'a> {
    /// Create a new CommandService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Execute a command invocation and build its reply
    #[instrument(skip(self, request), fields(user_id = %request.invoker.user_id, command = %request.command))]
    pub async fn execute(&self, request: &CommandRequest) -> ServiceResult<CommandReply> {
        if request.guild_id.is_none() {
            return Err(DomainError::NotInGuild.into());
        }
        PermissionService::new(self.ctx)
            .require_capability(&request.invoker, Capability::ReactionPinManage)?;

        let translations = self.ctx.translations();
        let command = ReactionPinCommand::parse(&request.command, &request.args, translations)?;
        info!(?command, "Running reactionpin command");

        let admin = WhitelistAdmin::new(self.ctx);
        let invoker = &request.invoker;
        let guild_id = request.guild_id;
        let title = translations.reactionpin.as_str();

        let reply = match command {
            ReactionPinCommand::List => match admin.list(invoker, guild_id).await? {
                WhitelistListing::Empty => {
                    CommandReply::warning(title, &translations.no_whitelisted_channels)
                }
                WhitelistListing::Channels(channels) => {
                    let mut description = translations.whitelisted_channels_header.clone();
                    for channel in &channels {
                        description.push('\n');
                        description.push_str(&translations.f_whitelisted_channel_entry(&channel.mention()));
                    }
                    CommandReply::info(title, description)
                }
            },
            ReactionPinCommand::Add(channel_id) => {
                admin.add(invoker, guild_id, channel_id).await?;
                CommandReply::info(title, &translations.channel_whitelisted)
            }
            ReactionPinCommand::Remove(channel_id) => {
                admin.remove(invoker, guild_id, channel_id).await?;
                CommandReply::info(title, &translations.channel_removed)
            }
            ReactionPinCommand::PinMessage(enabled) => {
                let state = admin.set_pin_notification(invoker, guild_id, enabled).await?;
                let text = match (state.changed, state.enabled) {
                    (true, true) => &translations.pin_messages_now_enabled,
                    (true, false) => &translations.pin_messages_now_disabled,
                    (false, true) => &translations.pin_messages_enabled,
                    (false, false) => &translations.pin_messages_disabled,
                };
                CommandReply::info(title, text)
            }
        };

        Ok(reply)
    }
}
