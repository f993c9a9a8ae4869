//! In-memory implementation of SettingsRepository

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value as JsonValue;

use pin_core::traits::{RepoResult, SettingsRepository};

#[derive(Debug, Default)]
pub struct MemorySettingsRepository {
    values: DashMap<String, JsonValue>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn get_raw(&self, key: &str) -> RepoResult<Option<JsonValue>> {
        Ok(self.values.get(key).map(|value| value.clone()))
    }

    async fn set_raw(&self, key: &str, value: JsonValue) -> RepoResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
