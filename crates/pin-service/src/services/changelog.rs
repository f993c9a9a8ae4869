//! Changelog service
//!
//! Records administrative changes in the audit log and mirrors them to the
//! configured changelog channel.

use pin_core::{AuditAction, AuditEntry, Embed, Snowflake};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;

/// Changelog service
pub struct ChangelogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChangelogService<'a> {
    /// Create a new ChangelogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a change that has already been applied
    ///
    /// Storage and delivery failures are logged; the change itself stands.
    #[instrument(skip(self, description))]
    pub async fn record(
        &self,
        guild_id: Snowflake,
        actor_id: Snowflake,
        action: AuditAction,
        target_id: Option<Snowflake>,
        description: String,
    ) -> AuditEntry {
        let entry = AuditEntry::new(guild_id, actor_id, action, target_id, description);

        if let Err(e) = self.ctx.audit_repo().record(&entry).await {
            warn!(error = %e, "Failed to store audit entry");
        }

        if let Some(channel_id) = self.ctx.changelog_channel() {
            let embed = Embed::new(&self.ctx.translations().reactionpin, Embed::COLOUR_REACTIONPIN)
                .with_description(&entry.description);
            match self.ctx.platform().send_embed(channel_id, &embed).await {
                Ok(_) => info!(channel_id = %channel_id, "Changelog entry posted"),
                Err(e) => warn!(channel_id = %channel_id, error = %e, "Failed to post changelog entry"),
            }
        }

        entry
    }
}
