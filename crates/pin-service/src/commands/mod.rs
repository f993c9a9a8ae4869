//! `reactionpin` command group parsing
//!
//! Turns the command text and its arguments into a typed
//! [`ReactionPinCommand`]. Argument errors carry the translated reason so the
//! reply can show it unchanged.

use pin_common::Translations;
use pin_core::{DomainError, Snowflake};

/// Group names accepted for the command group
pub const GROUP_ALIASES: &[&str] = &["reactionpin", "rp"];

/// A parsed `reactionpin` subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionPinCommand {
    List,
    Add(Snowflake),
    Remove(Snowflake),
    /// `None` reports the current value
    PinMessage(Option<bool>),
}

impl ReactionPinCommand {
    /// Parse `command` (group and optional subcommand) followed by `args`
    ///
    /// Extra trailing arguments are ignored.
    ///
    /// # Errors
    /// `UnknownCommand` for an unknown group or subcommand, `InvalidArgument`
    /// for missing or malformed arguments
    pub fn parse(
        command: &str,
        args: &[String],
        translations: &Translations,
    ) -> Result<Self, DomainError> {
        let mut tokens = command
            .split_whitespace()
            .chain(args.iter().flat_map(|arg| arg.split_whitespace()));

        let group = tokens.next().unwrap_or_default();
        if !GROUP_ALIASES.iter().any(|alias| alias.eq_ignore_ascii_case(group)) {
            return Err(DomainError::UnknownCommand(group.to_string()));
        }

        let Some(subcommand) = tokens.next() else {
            return Err(DomainError::invalid_argument(
                "subcommand",
                translations.f_missing_argument("subcommand"),
            ));
        };

        match subcommand.to_ascii_lowercase().as_str() {
            "list" | "l" | "?" => Ok(Self::List),
            "add" | "a" | "+" => parse_channel(tokens.next(), translations).map(Self::Add),
            "remove" | "del" | "r" | "d" | "-" => {
                parse_channel(tokens.next(), translations).map(Self::Remove)
            }
            "pin_message" | "pm" => tokens
                .next()
                .map(|value| parse_bool(value, translations))
                .transpose()
                .map(Self::PinMessage),
            _ => Err(DomainError::invalid_argument(
                "subcommand",
                translations.f_unknown_command(subcommand),
            )),
        }
    }
}

/// Channel argument: a mention (`<#id>`) or a raw id
///
/// # Errors
/// `InvalidArgument` when the argument is missing or not a positive id
pub fn parse_channel(value: Option<&str>, translations: &Translations) -> Result<Snowflake, DomainError> {
    let value = value.ok_or_else(|| {
        DomainError::invalid_argument("channel", translations.f_missing_argument("channel"))
    })?;

    match Snowflake::parse_channel_mention(value) {
        Ok(id) if id.into_inner() > 0 => Ok(id),
        _ => Err(DomainError::invalid_argument(
            "channel",
            translations.f_invalid_channel(value),
        )),
    }
}

/// Yes/no argument, case-insensitive
///
/// # Errors
/// `InvalidArgument` for anything outside the accepted words
pub fn parse_bool(value: &str, translations: &Translations) -> Result<bool, DomainError> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "t" | "1" | "enable" | "on" => Ok(true),
        "no" | "n" | "false" | "f" | "0" | "disable" | "off" => Ok(false),
        _ => Err(DomainError::invalid_argument(
            "enabled",
            translations.f_invalid_boolean(value),
        )),
    }
}
