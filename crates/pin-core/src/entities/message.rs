//! Message reference - the platform's view of a message at event time

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Message type as reported by the platform
///
/// Wire-encoded as the platform's integer message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MessageKind {
    /// Ordinary user-authored message
    #[default]
    Default,
    /// User-authored reply to another message
    ///
    /// Pinnable like `Default`, although a strict "anything but type 0" rule
    /// would reject it.
    Reply,
    /// The platform's automatic "X pinned a message" announcement
    PinNotification,
    /// Any other platform-generated message (joins, boosts, thread notices, ...)
    System(u8),
}

impl MessageKind {
    const DEFAULT: u8 = 0;
    const PIN_NOTIFICATION: u8 = 6;
    const REPLY: u8 = 19;

    /// System-generated messages are produced by the platform itself and cannot be pinned
    #[inline]
    #[must_use]
    pub fn is_system_generated(self) -> bool {
        matches!(self, Self::PinNotification | Self::System(_))
    }

    /// Get the numeric wire value
    #[inline]
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Default => Self::DEFAULT,
            Self::PinNotification => Self::PIN_NOTIFICATION,
            Self::Reply => Self::REPLY,
            Self::System(code) => code,
        }
    }
}

impl From<u8> for MessageKind {
    fn from(value: u8) -> Self {
        match value {
            Self::DEFAULT => Self::Default,
            Self::PIN_NOTIFICATION => Self::PinNotification,
            Self::REPLY => Self::Reply,
            other => Self::System(other),
        }
    }
}

impl From<MessageKind> for u8 {
    fn from(kind: MessageKind) -> Self {
        kind.as_u8()
    }
}

/// Message as seen by the pin engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    pub author_id: Snowflake,
    #[serde(default)]
    pub pinned: bool,
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
}

impl MessageRef {
    /// Create a reference to an ordinary, unpinned guild message
    pub fn new(
        id: Snowflake,
        channel_id: Snowflake,
        guild_id: Option<Snowflake>,
        author_id: Snowflake,
    ) -> Self {
        Self {
            id,
            channel_id,
            guild_id,
            author_id,
            pinned: false,
            kind: MessageKind::Default,
        }
    }

    /// Set the pinned flag
    #[must_use]
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Set the message kind
    #[must_use]
    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    #[inline]
    pub fn in_guild(&self) -> bool {
        self.guild_id.is_some()
    }
}
