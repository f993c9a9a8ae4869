//! Platform ports - the chat platform's action API and the permission subsystem

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{ChannelRef, Embed, MemberRef, MessageRef};
use crate::error::DomainError;
use crate::value_objects::{Capability, Snowflake};

/// Errors reported by the chat platform
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The channel already holds the maximum number of pins
    #[error("pin limit reached")]
    PinLimit,

    #[error("resource not found")]
    NotFound,

    #[error("platform returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for platform calls
pub type PlatformResult<T> = Result<T, PlatformError>;

impl From<PlatformError> for DomainError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::PinLimit => DomainError::PinLimitExceeded,
            other => DomainError::PlatformError(other.to_string()),
        }
    }
}

/// Action API of the chat platform
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    async fn pin_message(&self, message: &MessageRef) -> PlatformResult<()>;

    async fn unpin_message(&self, message: &MessageRef) -> PlatformResult<()>;

    /// Remove one user's reaction from a message
    async fn remove_reaction(
        &self,
        message: &MessageRef,
        emoji: &str,
        user_id: Snowflake,
    ) -> PlatformResult<()>;

    /// Post an embed, returning the id of the new message
    async fn send_embed(&self, channel_id: Snowflake, embed: &Embed) -> PlatformResult<Snowflake>;

    async fn delete_message(&self, message: &MessageRef) -> PlatformResult<()>;

    /// Resolve a channel, `None` when it no longer exists or is outside the guild
    async fn find_channel(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> PlatformResult<Option<ChannelRef>>;
}

/// Permission subsystem
pub trait CapabilityChecker: Send + Sync {
    fn has_capability(&self, member: &MemberRef, capability: Capability) -> bool;
}
