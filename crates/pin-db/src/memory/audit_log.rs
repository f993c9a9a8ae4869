//! In-memory implementation of AuditLogRepository

use async_trait::async_trait;
use dashmap::DashMap;

use pin_core::entities::AuditEntry;
use pin_core::traits::{AuditLogRepository, RepoResult};
use pin_core::value_objects::Snowflake;

/// Audit entries grouped by guild, oldest first
#[derive(Debug, Default)]
pub struct MemoryAuditLogRepository {
    entries: DashMap<Snowflake, Vec<AuditEntry>>,
}

impl MemoryAuditLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogRepository for MemoryAuditLogRepository {
    async fn record(&self, entry: &AuditEntry) -> RepoResult<()> {
        self.entries
            .entry(entry.guild_id)
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn list_by_guild(&self, guild_id: Snowflake, limit: i64) -> RepoResult<Vec<AuditEntry>> {
        let limit = usize::try_from(limit.clamp(1, 100)).unwrap_or(100);
        Ok(self
            .entries
            .get(&guild_id)
            .map(|entries| entries.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
