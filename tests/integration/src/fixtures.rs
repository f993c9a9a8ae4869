//! Test fixtures and data generators
//!
//! Provides reusable members, command bodies, and event envelopes.

use pin_core::{Permissions, Snowflake, PIN_EMOJI};
use serde::Serialize;
use serde_json::{json, Value};

pub const GUILD_ID: Snowflake = Snowflake::new(1);
pub const BOT_ID: Snowflake = Snowflake::new(9000);
pub const CHANGELOG_ID: Snowflake = Snowflake::new(77);

/// Member as sent by the dispatcher
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: String,
    pub bot: bool,
    pub roles: Vec<String>,
    pub permissions: String,
}

impl Member {
    pub fn regular(id: i64) -> Self {
        Self {
            id: id.to_string(),
            bot: false,
            roles: Vec::new(),
            permissions: "0".to_string(),
        }
    }

    /// Holds MANAGE_MESSAGES (pin anywhere)
    pub fn moderator(id: i64) -> Self {
        Self::regular(id).with_permissions(Permissions::MANAGE_MESSAGES)
    }

    /// Holds MANAGE_GUILD (whitelist administration)
    pub fn admin(id: i64) -> Self {
        Self::regular(id).with_permissions(Permissions::MANAGE_GUILD)
    }

    pub fn bot(id: i64) -> Self {
        Self {
            bot: true,
            ..Self::regular(id)
        }
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions.bits().to_string();
        self
    }

    pub fn with_role(mut self, role_id: i64) -> Self {
        self.roles.push(role_id.to_string());
        self
    }
}

/// Command invocation body
#[derive(Debug, Clone, Serialize)]
pub struct CommandBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
    pub channel_id: String,
    pub invoker: Member,
    pub command: String,
    pub args: Vec<String>,
}

impl CommandBody {
    /// `rp <args...>` in the test guild
    pub fn rp(invoker: Member, args: &[&str]) -> Self {
        Self {
            guild_id: Some(GUILD_ID.to_string()),
            channel_id: "500".to_string(),
            invoker,
            command: "rp".to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Same command sent from a direct message
    pub fn in_dm(mut self) -> Self {
        self.guild_id = None;
        self
    }
}

/// Message payload
pub fn message(id: i64, channel_id: i64, author_id: i64) -> Value {
    json!({
        "id": id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": GUILD_ID.to_string(),
        "author_id": author_id.to_string(),
        "pinned": false,
        "type": 0
    })
}

/// Same message, already pinned
pub fn pinned(mut message: Value) -> Value {
    message["pinned"] = json!(true);
    message
}

/// Same message with another platform type
pub fn with_type(mut message: Value, kind: u8) -> Value {
    message["type"] = json!(kind);
    message
}

fn envelope(event_type: &str, data: Value) -> String {
    json!({ "t": event_type, "d": data }).to_string()
}

/// `MESSAGE_REACTION_ADD` with the pin emoji
pub fn pin_added(message: Value, member: &Member) -> String {
    envelope(
        "MESSAGE_REACTION_ADD",
        json!({ "emoji": PIN_EMOJI, "message": message, "member": member }),
    )
}

/// `MESSAGE_REACTION_REMOVE` with the pin emoji
pub fn pin_removed(message: Value, member: &Member) -> String {
    envelope(
        "MESSAGE_REACTION_REMOVE",
        json!({ "emoji": PIN_EMOJI, "message": message, "member": member }),
    )
}

/// `MESSAGE_REACTION_ADD` with an arbitrary emoji
pub fn reaction_added(emoji: &str, message: Value, member: &Member) -> String {
    envelope(
        "MESSAGE_REACTION_ADD",
        json!({ "emoji": emoji, "message": message, "member": member }),
    )
}

pub fn reactions_cleared(message: Value) -> String {
    envelope("MESSAGE_REACTION_REMOVE_ALL", message)
}

pub fn message_created(message: Value) -> String {
    envelope("MESSAGE_CREATE", message)
}
