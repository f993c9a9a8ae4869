//! # pin-core
//!
//! Domain layer for ReactionPin: entities, value objects, ports (traits) for the
//! external collaborators, and the pure pin authorization engine.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod engine;
pub mod entities;
pub mod error;
pub mod settings;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use engine::{decide_on_add, decide_on_clear_all, decide_on_remove, Decision, Outcome, PIN_EMOJI};
pub use entities::{
    AuditAction, AuditEntry, ChannelRef, Embed, MemberRef, MessageKind, MessageRef, PinReaction,
    ReactionEvent, WhitelistEntry,
};
pub use error::DomainError;
pub use settings::SettingKey;
pub use traits::{
    AuditLogRepository, CapabilityChecker, ChatPlatform, PlatformError, PlatformResult,
    RepoResult, SettingsRepository, WhitelistRepository,
};
pub use value_objects::{Capability, Permissions, Snowflake, SnowflakeParseError};
