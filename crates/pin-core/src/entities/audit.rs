//! Audit entry - changelog record of an administrative change

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::Snowflake;

/// Administrative action recorded in the changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    ChannelWhitelisted,
    ChannelRemoved,
    PinMessagesEnabled,
    PinMessagesDisabled,
}

impl AuditAction {
    /// Database representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChannelWhitelisted => "channel_whitelisted",
            Self::ChannelRemoved => "channel_removed",
            Self::PinMessagesEnabled => "pin_messages_enabled",
            Self::PinMessagesDisabled => "pin_messages_disabled",
        }
    }

    /// Parse the database representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "channel_whitelisted" => Some(Self::ChannelWhitelisted),
            "channel_removed" => Some(Self::ChannelRemoved),
            "pin_messages_enabled" => Some(Self::PinMessagesEnabled),
            "pin_messages_disabled" => Some(Self::PinMessagesDisabled),
            _ => None,
        }
    }
}

/// Changelog record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub actor_id: Snowflake,
    pub action: AuditAction,
    pub target_id: Option<Snowflake>,
    /// Human-readable changelog line
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        guild_id: Snowflake,
        actor_id: Snowflake,
        action: AuditAction,
        target_id: Option<Snowflake>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            guild_id,
            actor_id,
            action,
            target_id,
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
