//! Domain entities - core business objects

mod audit;
mod channel;
mod embed;
mod member;
mod message;
mod reaction;
mod whitelist;

pub use audit::{AuditAction, AuditEntry};
pub use channel::{mention, ChannelRef};
pub use embed::Embed;
pub use member::MemberRef;
pub use message::{MessageKind, MessageRef};
pub use reaction::{PinReaction, ReactionEvent};
pub use whitelist::WhitelistEntry;
