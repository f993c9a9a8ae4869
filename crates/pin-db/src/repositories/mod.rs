//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pin-core.

mod audit_log;
mod error;
mod settings;
mod whitelist;

pub use audit_log::PgAuditLogRepository;
pub use settings::PgSettingsRepository;
pub use whitelist::PgWhitelistRepository;
