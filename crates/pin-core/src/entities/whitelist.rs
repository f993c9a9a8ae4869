//! Whitelist entry - a channel enabled for ReactionPin

use crate::value_objects::Snowflake;

/// Whitelisted channel, identified by its channel id alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WhitelistEntry {
    pub channel_id: Snowflake,
}

impl WhitelistEntry {
    pub fn new(channel_id: Snowflake) -> Self {
        Self { channel_id }
    }
}
