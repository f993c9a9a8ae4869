//! Pin controller
//!
//! Gathers the facts the pin engine needs, turns its decision into platform
//! side effects, and suppresses the bot's own pin announcements when they are
//! disabled. Nothing here returns an error: failures are logged and the event
//! path carries on.

use pin_core::engine::{decide_on_add, decide_on_clear_all, decide_on_remove};
use pin_core::{
    Capability, Decision, Embed, MessageKind, MessageRef, Outcome, PinReaction, ReactionEvent,
    PIN_EMOJI,
};
use tracing::{debug, error, info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;
use super::settings::SettingsService;

/// Pin controller
pub struct PinController<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PinController<'a> {
    /// Create a new PinController
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Route a reaction lifecycle event
    pub async fn handle(&self, event: &ReactionEvent) -> Outcome {
        match event {
            ReactionEvent::Added(reaction) => self.on_reaction_add(reaction).await,
            ReactionEvent::Removed(reaction) => self.on_reaction_remove(reaction).await,
            ReactionEvent::ClearedAll(message) => self.on_reaction_clear(message).await,
        }
    }

    /// A reaction was added to a message
    #[instrument(skip(self, reaction), fields(message_id = %reaction.message.id, user_id = %reaction.actor.user_id))]
    pub async fn on_reaction_add(&self, reaction: &PinReaction) -> Outcome {
        if !Self::is_pin_candidate(reaction) {
            return Outcome::ignored();
        }

        let outcome = match self.add_facts(reaction).await {
            Ok((whitelisted, access, muted)) => decide_on_add(reaction, whitelisted, access, muted),
            Err(e) => {
                error!(error = %e, "Failed to evaluate pin reaction");
                return Outcome::ignored();
            }
        };
        debug!(decision = %outcome.decision, consumed = outcome.consumed, "Pin reaction evaluated");

        self.execute(outcome, reaction).await
    }

    /// A reaction was removed from a message
    #[instrument(skip(self, reaction), fields(message_id = %reaction.message.id, user_id = %reaction.actor.user_id))]
    pub async fn on_reaction_remove(&self, reaction: &PinReaction) -> Outcome {
        if !Self::is_pin_candidate(reaction) || !reaction.message.pinned {
            return Outcome::ignored();
        }

        let outcome = match self.remove_facts(reaction).await {
            Ok((whitelisted, access)) => decide_on_remove(reaction, whitelisted, access),
            Err(e) => {
                error!(error = %e, "Failed to evaluate pin reaction removal");
                return Outcome::ignored();
            }
        };
        debug!(decision = %outcome.decision, consumed = outcome.consumed, "Pin reaction removal evaluated");

        if outcome.decision == Decision::Unpin {
            self.unpin(&reaction.message).await;
        }
        outcome
    }

    /// Every reaction was cleared from a message
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn on_reaction_clear(&self, message: &MessageRef) -> Outcome {
        let outcome = decide_on_clear_all(message);
        if outcome.decision == Decision::Unpin {
            self.unpin(message).await;
        }
        outcome
    }

    /// A message was posted by the bot itself
    ///
    /// Returns true when the message was a pin announcement that got deleted,
    /// which consumes the event.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn on_bot_message(&self, message: &MessageRef) -> bool {
        if !message.in_guild()
            || !message.is_authored_by(self.ctx.bot_user_id())
            || message.kind != MessageKind::PinNotification
        {
            return false;
        }

        match SettingsService::new(self.ctx).pin_message_enabled().await {
            Ok(true) => false,
            Ok(false) => match self.ctx.platform().delete_message(message).await {
                Ok(()) => {
                    info!("Pin notification suppressed");
                    true
                }
                Err(e) => {
                    warn!(error = %e, "Failed to delete pin notification");
                    false
                }
            },
            Err(e) => {
                error!(error = %e, "Failed to read pin notification setting");
                false
            }
        }
    }

    fn is_pin_candidate(reaction: &PinReaction) -> bool {
        reaction.is_emoji(PIN_EMOJI) && !reaction.actor.bot
    }

    /// (whitelisted, manage access, muted)
    async fn add_facts(&self, reaction: &PinReaction) -> ServiceResult<(bool, bool, bool)> {
        let (whitelisted, access) = self.remove_facts(reaction).await?;
        let mute_role = SettingsService::new(self.ctx).mute_role().await?;
        Ok((whitelisted, access, reaction.actor.is_muted(mute_role)))
    }

    /// (whitelisted, manage access)
    async fn remove_facts(&self, reaction: &PinReaction) -> ServiceResult<(bool, bool)> {
        let access =
            PermissionService::new(self.ctx).has_capability(&reaction.actor, Capability::ReactionPin);
        let whitelisted = self
            .ctx
            .whitelist_repo()
            .find(reaction.message.channel_id)
            .await?
            .is_some();
        Ok((whitelisted, access))
    }

    /// Apply an add-path decision
    async fn execute(&self, outcome: Outcome, reaction: &PinReaction) -> Outcome {
        let message = &reaction.message;
        match outcome.decision {
            Decision::Pin => match self.ctx.platform().pin_message(message).await {
                Ok(()) => {
                    info!("Message pinned");
                    outcome
                }
                Err(e) => {
                    warn!(error = %e, "Pin refused, treating as pin limit");
                    self.reject(reaction, Decision::RejectPinLimit).await;
                    outcome.with_decision(Decision::RejectPinLimit)
                }
            },
            Decision::RejectSystemMessage | Decision::RejectPinLimit => {
                self.reject(reaction, outcome.decision).await;
                outcome
            }
            Decision::RemoveReactionSilently => {
                self.remove_reaction(reaction).await;
                outcome
            }
            // The add path never unpins
            Decision::Unpin | Decision::Ignore => outcome,
        }
    }

    /// Take the reaction back and explain why
    async fn reject(&self, reaction: &PinReaction, decision: Decision) {
        self.remove_reaction(reaction).await;

        let translations = self.ctx.translations();
        let text = match decision {
            Decision::RejectSystemMessage => &translations.msg_not_pinned_system,
            _ => &translations.msg_not_pinned_limit,
        };
        let channel_id = reaction.message.channel_id;
        if let Err(e) = self.ctx.platform().send_embed(channel_id, &Embed::error(text)).await {
            warn!(channel_id = %channel_id, error = %e, "Failed to send pin rejection notice");
        }
    }

    async fn remove_reaction(&self, reaction: &PinReaction) {
        if let Err(e) = self
            .ctx
            .platform()
            .remove_reaction(&reaction.message, &reaction.emoji, reaction.actor.user_id)
            .await
        {
            warn!(error = %e, "Failed to remove pin reaction");
        }
    }

    async fn unpin(&self, message: &MessageRef) {
        match self.ctx.platform().unpin_message(message).await {
            Ok(()) => info!(message_id = %message.id, "Message unpinned"),
            Err(e) => warn!(message_id = %message.id, error = %e, "Failed to unpin message"),
        }
    }
}
