//! Reaction lifecycle events

use serde::{Deserialize, Serialize};

use super::member::MemberRef;
use super::message::MessageRef;

/// A single reaction added to or removed from a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinReaction {
    pub emoji: String,
    pub message: MessageRef,
    #[serde(rename = "member")]
    pub actor: MemberRef,
}

impl PinReaction {
    pub fn new(emoji: impl Into<String>, message: MessageRef, actor: MemberRef) -> Self {
        Self {
            emoji: emoji.into(),
            message,
            actor,
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }

    /// The reactor is the author of the message
    #[inline]
    pub fn is_self_reaction(&self) -> bool {
        self.message.is_authored_by(self.actor.user_id)
    }
}

/// Reaction lifecycle event
///
/// Clearing all reactions carries no emoji and no actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionEvent {
    Added(PinReaction),
    Removed(PinReaction),
    ClearedAll(MessageRef),
}
