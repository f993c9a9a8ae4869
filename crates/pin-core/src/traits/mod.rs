//! Ports - traits implemented by the infrastructure layers

mod platform;
mod repositories;

pub use platform::{CapabilityChecker, ChatPlatform, PlatformError, PlatformResult};
pub use repositories::{AuditLogRepository, RepoResult, SettingsRepository, WhitelistRepository};
