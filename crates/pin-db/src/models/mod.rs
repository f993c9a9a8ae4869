//! Database models
//!
//! Row structs mirroring the tables, with SQLx `FromRow` derives.

mod audit_log;
mod setting;
mod whitelist;

pub use audit_log::AuditLogModel;
pub use setting::SettingModel;
pub use whitelist::WhitelistChannelModel;
