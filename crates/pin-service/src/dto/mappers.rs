//! Mappers from service errors to reply embeds

use pin_common::Translations;
use pin_core::{DomainError, Embed};

use crate::services::ServiceError;

/// Translated red embed for a failed command
///
/// Infrastructure failures are not shown to the invoker; they get the generic
/// internal error text.
pub fn error_embed(error: &ServiceError, translations: &Translations) -> Embed {
    let text = match error.as_domain() {
        Some(DomainError::AlreadyWhitelisted(_)) => translations.channel_already_whitelisted.clone(),
        Some(DomainError::NotWhitelisted(_)) => translations.channel_not_whitelisted.clone(),
        Some(DomainError::MissingCapability(_)) => translations.missing_capability.clone(),
        Some(DomainError::NotInGuild) => translations.not_in_guild.clone(),
        Some(DomainError::InvalidArgument { reason, .. }) => reason.clone(),
        Some(DomainError::UnknownCommand(name)) => translations.f_unknown_command(name),
        Some(DomainError::SystemMessageNotPinnable) => translations.msg_not_pinned_system.clone(),
        Some(DomainError::PinLimitExceeded) => translations.msg_not_pinned_limit.clone(),
        _ => translations.internal_error.clone(),
    };
    Embed::error(text)
}
