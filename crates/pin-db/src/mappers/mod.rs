//! Model to entity mappers
//!
//! - `From<Model> for Entity` / `TryFrom<Model> for Entity`: database rows to domain objects
//! - `*Insert` structs: entity data prepared for database operations

mod audit_log;
mod whitelist;

pub use audit_log::AuditLogInsert;
