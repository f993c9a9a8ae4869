//! Platform event types
//!
//! Events arrive as `{ "t": <type>, "d": <payload> }` envelopes. Only the
//! types the pin module listens to are decoded; everything else is skipped.

use pin_core::{MessageRef, ReactionEvent};
use serde::Deserialize;
use std::fmt;

/// Event type names carried in the `t` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformEventType {
    MessageReactionAdd,
    MessageReactionRemove,
    MessageReactionRemoveAll,
    MessageCreate,
}

impl PlatformEventType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MessageReactionAdd => "MESSAGE_REACTION_ADD",
            Self::MessageReactionRemove => "MESSAGE_REACTION_REMOVE",
            Self::MessageReactionRemoveAll => "MESSAGE_REACTION_REMOVE_ALL",
            Self::MessageCreate => "MESSAGE_CREATE",
        }
    }

    /// Parse an event type from a string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MESSAGE_REACTION_ADD" => Some(Self::MessageReactionAdd),
            "MESSAGE_REACTION_REMOVE" => Some(Self::MessageReactionRemove),
            "MESSAGE_REACTION_REMOVE_ALL" => Some(Self::MessageReactionRemoveAll),
            "MESSAGE_CREATE" => Some(Self::MessageCreate),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw event envelope
#[derive(Debug, Clone, Deserialize)]
pub struct EventEnvelope {
    pub t: String,
    #[serde(default)]
    pub d: serde_json::Value,
}

/// A decoded platform event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    Reaction(ReactionEvent),
    MessageCreate(MessageRef),
}

/// Error decoding an event envelope
#[derive(Debug, thiserror::Error)]
pub enum EventDecodeError {
    #[error("malformed envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("malformed {event_type} payload: {source}")]
    Payload {
        event_type: PlatformEventType,
        #[source]
        source: serde_json::Error,
    },
}

impl PlatformEvent {
    /// Decode an envelope, `Ok(None)` for event types nobody listens to
    pub fn decode(raw: &str) -> Result<Option<Self>, EventDecodeError> {
        let envelope: EventEnvelope = serde_json::from_str(raw).map_err(EventDecodeError::Envelope)?;
        let Some(event_type) = PlatformEventType::from_str(&envelope.t) else {
            return Ok(None);
        };

        let payload_error = |source| EventDecodeError::Payload { event_type, source };
        let event = match event_type {
            PlatformEventType::MessageReactionAdd => Self::Reaction(ReactionEvent::Added(
                serde_json::from_value(envelope.d).map_err(payload_error)?,
            )),
            PlatformEventType::MessageReactionRemove => Self::Reaction(ReactionEvent::Removed(
                serde_json::from_value(envelope.d).map_err(payload_error)?,
            )),
            PlatformEventType::MessageReactionRemoveAll => Self::Reaction(ReactionEvent::ClearedAll(
                serde_json::from_value(envelope.d).map_err(payload_error)?,
            )),
            PlatformEventType::MessageCreate => {
                Self::MessageCreate(serde_json::from_value(envelope.d).map_err(payload_error)?)
            }
        };
        Ok(Some(event))
    }

    pub fn event_type(&self) -> PlatformEventType {
        match self {
            Self::Reaction(ReactionEvent::Added(_)) => PlatformEventType::MessageReactionAdd,
            Self::Reaction(ReactionEvent::Removed(_)) => PlatformEventType::MessageReactionRemove,
            Self::Reaction(ReactionEvent::ClearedAll(_)) => PlatformEventType::MessageReactionRemoveAll,
            Self::MessageCreate(_) => PlatformEventType::MessageCreate,
        }
    }
}
