//! Translation table
//!
//! English defaults, optionally overridden from a JSON file. Keys missing in
//! the file keep their English text. Templates use `{channel}` / `{value}`
//! placeholders.

use serde::Deserialize;
use std::path::Path;

/// Every user-visible string of the ReactionPin module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Translations {
    pub reactionpin: String,

    // Event path notices
    pub msg_not_pinned_system: String,
    pub msg_not_pinned_limit: String,

    // Whitelist listing
    pub whitelisted_channels_header: String,
    pub whitelisted_channel_entry: String,
    pub no_whitelisted_channels: String,

    // Whitelist changes
    pub channel_whitelisted: String,
    pub channel_removed: String,
    pub channel_already_whitelisted: String,
    pub channel_not_whitelisted: String,

    // Pin notification toggle
    pub pin_messages_enabled: String,
    pub pin_messages_disabled: String,
    pub pin_messages_now_enabled: String,
    pub pin_messages_now_disabled: String,

    // Changelog
    pub log_channel_whitelisted_rp: String,
    pub log_channel_removed_rp: String,

    // Command errors
    pub missing_capability: String,
    pub not_in_guild: String,
    pub missing_argument: String,
    pub invalid_channel: String,
    pub channel_not_found: String,
    pub invalid_boolean: String,
    pub unknown_command: String,
    pub internal_error: String,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            reactionpin: "ReactionPin".to_string(),
            msg_not_pinned_system: "System messages cannot be pinned.".to_string(),
            msg_not_pinned_limit:
                "Message could not be pinned, because the pin limit of this channel has been reached."
                    .to_string(),
            whitelisted_channels_header: "Whitelisted channels:".to_string(),
            whitelisted_channel_entry: ":small_orange_diamond: {channel}".to_string(),
            no_whitelisted_channels: "No channels have been whitelisted yet.".to_string(),
            channel_whitelisted: "Channel has been whitelisted.".to_string(),
            channel_removed: "Channel has been removed from the whitelist.".to_string(),
            channel_already_whitelisted: "Channel is already whitelisted.".to_string(),
            channel_not_whitelisted: "Channel is not whitelisted.".to_string(),
            pin_messages_enabled: "\"Pinned a message\" notifications are currently **enabled**."
                .to_string(),
            pin_messages_disabled: "\"Pinned a message\" notifications are currently **disabled**."
                .to_string(),
            pin_messages_now_enabled: "\"Pinned a message\" notifications have been **enabled**."
                .to_string(),
            pin_messages_now_disabled: "\"Pinned a message\" notifications have been **disabled**."
                .to_string(),
            log_channel_whitelisted_rp: "Channel {channel} has been whitelisted for ReactionPin."
                .to_string(),
            log_channel_removed_rp: "Channel {channel} has been removed from the ReactionPin whitelist."
                .to_string(),
            missing_capability: "You are not allowed to use this command.".to_string(),
            not_in_guild: "This command can only be used in a server.".to_string(),
            missing_argument: "Missing argument `{value}`.".to_string(),
            invalid_channel: "`{value}` is not a channel.".to_string(),
            channel_not_found: "Channel `{value}` could not be found.".to_string(),
            invalid_boolean: "`{value}` is not a valid yes/no value.".to_string(),
            unknown_command: "Unknown subcommand `{value}`.".to_string(),
            internal_error: "Something went wrong, please try again later.".to_string(),
        }
    }
}

impl Translations {
    /// Parse overrides from JSON
    ///
    /// # Errors
    /// Returns an error if the document is not a JSON object of strings
    pub fn from_json(json: &str) -> Result<Self, TranslationsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load overrides from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TranslationsError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// English defaults, or the file's overrides when a path is given
    ///
    /// # Errors
    /// Returns an error if the given file cannot be loaded
    pub fn load(path: Option<&str>) -> Result<Self, TranslationsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn f_whitelisted_channel_entry(&self, mention: &str) -> String {
        self.whitelisted_channel_entry.replace("{channel}", mention)
    }

    pub fn f_log_channel_whitelisted_rp(&self, mention: &str) -> String {
        self.log_channel_whitelisted_rp.replace("{channel}", mention)
    }

    pub fn f_log_channel_removed_rp(&self, mention: &str) -> String {
        self.log_channel_removed_rp.replace("{channel}", mention)
    }

    pub fn f_missing_argument(&self, name: &str) -> String {
        self.missing_argument.replace("{value}", name)
    }

    pub fn f_invalid_channel(&self, value: &str) -> String {
        self.invalid_channel.replace("{value}", value)
    }

    pub fn f_channel_not_found(&self, value: &str) -> String {
        self.channel_not_found.replace("{value}", value)
    }

    pub fn f_invalid_boolean(&self, value: &str) -> String {
        self.invalid_boolean.replace("{value}", value)
    }

    pub fn f_unknown_command(&self, value: &str) -> String {
        self.unknown_command.replace("{value}", value)
    }
}

/// Translation loading errors
#[derive(Debug, thiserror::Error)]
pub enum TranslationsError {
    #[error("Failed to read translations: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse translations: {0}")]
    Parse(#[from] serde_json::Error),
}
