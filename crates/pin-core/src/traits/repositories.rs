//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;

use crate::entities::{AuditEntry, WhitelistEntry};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Whitelist Repository
// ============================================================================

#[async_trait]
pub trait WhitelistRepository: Send + Sync {
    /// Find the entry for a channel
    async fn find(&self, channel_id: Snowflake) -> RepoResult<Option<WhitelistEntry>>;

    /// List every entry, oldest first
    async fn list_all(&self) -> RepoResult<Vec<WhitelistEntry>>;

    /// Create an entry
    ///
    /// Fails with `AlreadyWhitelisted` when the channel already has one.
    async fn create(&self, channel_id: Snowflake) -> RepoResult<WhitelistEntry>;

    /// Delete an entry
    ///
    /// Fails with `NotWhitelisted` when the channel has none.
    async fn delete(&self, entry: &WhitelistEntry) -> RepoResult<()>;
}

// ============================================================================
// Settings Repository
// ============================================================================

/// Process-wide key/value settings, values stored as JSON
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read the raw value of a key
    async fn get_raw(&self, key: &str) -> RepoResult<Option<serde_json::Value>>;

    /// Insert or replace the value of a key
    async fn set_raw(&self, key: &str, value: serde_json::Value) -> RepoResult<()>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Persist an entry
    async fn record(&self, entry: &AuditEntry) -> RepoResult<()>;

    /// Most recent entries for a guild, newest first
    async fn list_by_guild(&self, guild_id: Snowflake, limit: i64) -> RepoResult<Vec<AuditEntry>>;
}
