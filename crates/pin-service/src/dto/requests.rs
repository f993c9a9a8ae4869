//! Request DTOs

use pin_core::{MemberRef, Snowflake};
use serde::Deserialize;

/// A `reactionpin` command invocation forwarded by the dispatcher
#[derive(Debug, Clone, Deserialize)]
pub struct CommandRequest {
    /// Absent for direct messages
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    pub channel_id: Snowflake,
    pub invoker: MemberRef,
    /// Group name, optionally followed by the subcommand
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}
