//! Channel reference - a live guild channel resolved through the platform

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Live channel as resolved by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: Snowflake,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ChannelRef {
    pub fn new(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            name: Some(name.into()),
        }
    }

    /// Platform mention markup (`<#id>`)
    pub fn mention(&self) -> String {
        mention(self.id)
    }

    #[inline]
    pub fn belongs_to(&self, guild_id: Snowflake) -> bool {
        self.guild_id == Some(guild_id)
    }
}

/// Mention markup for a channel id
pub fn mention(channel_id: Snowflake) -> String {
    format!("<#{channel_id}>")
}
