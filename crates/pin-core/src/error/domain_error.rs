//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Capability, Snowflake};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Whitelist Errors
    // =========================================================================
    #[error("Channel is already whitelisted: {0}")]
    AlreadyWhitelisted(Snowflake),

    #[error("Channel is not whitelisted: {0}")]
    NotWhitelisted(Snowflake),

    // =========================================================================
    // Pin Errors (recovered inside the event path)
    // =========================================================================
    #[error("Channel pin limit reached")]
    PinLimitExceeded,

    #[error("System messages cannot be pinned")]
    SystemMessageNotPinnable,

    // =========================================================================
    // Authorization / Context Errors
    // =========================================================================
    #[error("Missing capability: {0}")]
    MissingCapability(Capability),

    #[error("Command requires a guild context")]
    NotInGuild,

    // =========================================================================
    // Command Input Errors
    // =========================================================================
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Platform error: {0}")]
    PlatformError(String),

    #[error("Setting `{key}` holds an unreadable value: {reason}")]
    SettingDecode { key: String, reason: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for an invalid command argument
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Whitelist
            Self::AlreadyWhitelisted(_) => "ALREADY_WHITELISTED",
            Self::NotWhitelisted(_) => "NOT_WHITELISTED",

            // Pin
            Self::PinLimitExceeded => "PIN_LIMIT_EXCEEDED",
            Self::SystemMessageNotPinnable => "SYSTEM_MESSAGE_NOT_PINNABLE",

            // Authorization
            Self::MissingCapability(_) => "MISSING_CAPABILITY",
            Self::NotInGuild => "NOT_IN_GUILD",

            // Input
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::PlatformError(_) => "PLATFORM_ERROR",
            Self::SettingDecode { .. } => "SETTING_DECODE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::UnknownCommand(_) | Self::NotInGuild
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingCapability(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyWhitelisted(_) | Self::NotWhitelisted(_))
    }

    /// Errors the event path recovers from by removing the reaction and posting a notice
    pub fn is_pin_rejection(&self) -> bool {
        matches!(self, Self::PinLimitExceeded | Self::SystemMessageNotPinnable)
    }

    /// Errors shown to the command invoker as-is
    pub fn is_user_facing(&self) -> bool {
        self.is_validation() || self.is_authorization() || self.is_conflict()
    }
}
