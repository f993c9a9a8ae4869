//! In-memory implementation of WhitelistRepository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use pin_core::entities::WhitelistEntry;
use pin_core::error::DomainError;
use pin_core::traits::{RepoResult, WhitelistRepository};
use pin_core::value_objects::Snowflake;

/// In-memory whitelist keyed by channel id
#[derive(Debug, Default)]
pub struct MemoryWhitelistRepository {
    /// channel id -> insertion sequence
    channels: DashMap<Snowflake, u64>,
    sequence: AtomicU64,
}

impl MemoryWhitelistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[async_trait]
impl WhitelistRepository for MemoryWhitelistRepository {
    async fn find(&self, channel_id: Snowflake) -> RepoResult<Option<WhitelistEntry>> {
        Ok(self
            .channels
            .contains_key(&channel_id)
            .then(|| WhitelistEntry::new(channel_id)))
    }

    async fn list_all(&self) -> RepoResult<Vec<WhitelistEntry>> {
        let mut entries: Vec<(u64, Snowflake)> = self
            .channels
            .iter()
            .map(|item| (*item.value(), *item.key()))
            .collect();
        entries.sort_unstable();
        Ok(entries
            .into_iter()
            .map(|(_, channel_id)| WhitelistEntry::new(channel_id))
            .collect())
    }

    async fn create(&self, channel_id: Snowflake) -> RepoResult<WhitelistEntry> {
        match self.channels.entry(channel_id) {
            Entry::Occupied(_) => Err(DomainError::AlreadyWhitelisted(channel_id)),
            Entry::Vacant(slot) => {
                slot.insert(self.sequence.fetch_add(1, Ordering::Relaxed));
                Ok(WhitelistEntry::new(channel_id))
            }
        }
    }

    async fn delete(&self, entry: &WhitelistEntry) -> RepoResult<()> {
        self.channels
            .remove(&entry.channel_id)
            .map(|_| ())
            .ok_or(DomainError::NotWhitelisted(entry.channel_id))
    }
}
