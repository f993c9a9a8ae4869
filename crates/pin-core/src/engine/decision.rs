//! Decision and outcome types

use std::fmt;

/// What the controller should do with a reaction event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Pin,
    Unpin,
    /// Remove the reaction and explain that system messages cannot be pinned
    RejectSystemMessage,
    /// Remove the reaction and explain that the channel is full
    RejectPinLimit,
    /// Remove the reaction without any notice
    RemoveReactionSilently,
    Ignore,
}

impl Decision {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pin => "pin",
            Self::Unpin => "unpin",
            Self::RejectSystemMessage => "reject_system_message",
            Self::RejectPinLimit => "reject_pin_limit",
            Self::RemoveReactionSilently => "remove_reaction_silently",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decision plus whether later listeners must skip the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub decision: Decision,
    pub consumed: bool,
}

impl Outcome {
    /// Decision that finalizes handling of the event
    pub const fn consumed(decision: Decision) -> Self {
        Self {
            decision,
            consumed: true,
        }
    }

    /// Decision that leaves the event to later listeners
    pub const fn pass(decision: Decision) -> Self {
        Self {
            decision,
            consumed: false,
        }
    }

    /// `Ignore`, not consumed
    pub const fn ignored() -> Self {
        Self::pass(Decision::Ignore)
    }

    /// Same consumption, different decision
    #[must_use]
    pub const fn with_decision(self, decision: Decision) -> Self {
        Self {
            decision,
            consumed: self.consumed,
        }
    }
}
