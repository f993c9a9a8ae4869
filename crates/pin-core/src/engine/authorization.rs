//! Authorization rules for the three reaction lifecycle events

use super::decision::{Decision, Outcome};
use crate::entities::{MessageRef, PinReaction};

/// The reaction that triggers pinning (📌)
pub const PIN_EMOJI: &str = "\u{1f4cc}";

/// Reaction is the pin emoji and comes from a human
fn is_pin_candidate(reaction: &PinReaction) -> bool {
    reaction.is_emoji(PIN_EMOJI) && !reaction.actor.bot
}

/// Decide what to do when a reaction is added
///
/// A reaction is considered when the reactor holds manage access, the channel
/// is whitelisted, or the reactor authored the message. Considered reactions
/// are always consumed. Whitelisting never restricts self-pinning; it only
/// lets non-privileged members show intent on other members' messages, which
/// is then refused.
pub fn decide_on_add(
    reaction: &PinReaction,
    whitelisted: bool,
    manage_access: bool,
    muted: bool,
) -> Outcome {
    if !is_pin_candidate(reaction) {
        return Outcome::ignored();
    }

    let self_react = reaction.is_self_reaction();
    if !(manage_access || whitelisted || self_react) {
        return Outcome::ignored();
    }

    let authorized = manage_access || (self_react && !muted);
    if !authorized {
        return Outcome::consumed(Decision::RemoveReactionSilently);
    }

    if reaction.message.kind.is_system_generated() {
        Outcome::consumed(Decision::RejectSystemMessage)
    } else {
        Outcome::consumed(Decision::Pin)
    }
}

/// Decide what to do when a reaction is removed
///
/// Only an actual unpin consumes the event.
pub fn decide_on_remove(reaction: &PinReaction, whitelisted: bool, manage_access: bool) -> Outcome {
    if !is_pin_candidate(reaction) || !reaction.message.pinned {
        return Outcome::ignored();
    }

    if manage_access || (whitelisted && reaction.is_self_reaction()) {
        Outcome::consumed(Decision::Unpin)
    } else {
        Outcome::ignored()
    }
}

/// Decide what to do when every reaction is cleared from a message
///
/// Always consumed.
pub fn decide_on_clear_all(message: &MessageRef) -> Outcome {
    if message.pinned {
        Outcome::consumed(Decision::Unpin)
    } else {
        Outcome::consumed(Decision::Ignore)
    }
}
