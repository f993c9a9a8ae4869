//! In-memory repositories
//!
//! Process-local state backed by `DashMap`. Used by the `memory` storage
//! backend and by tests; nothing survives a restart.

mod audit_log;
mod settings;
mod whitelist;

pub use audit_log::MemoryAuditLogRepository;
pub use settings::MemorySettingsRepository;
pub use whitelist::MemoryWhitelistRepository;
