//! Setting database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for settings table
#[derive(Debug, Clone, FromRow)]
pub struct SettingModel {
    pub key: String,
    pub value: JsonValue,
    pub updated_at: DateTime<Utc>,
}
