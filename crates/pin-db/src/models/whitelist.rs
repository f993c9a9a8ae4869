//! Whitelisted channel database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactionpin_channels table
#[derive(Debug, Clone, FromRow)]
pub struct WhitelistChannelModel {
    pub channel_id: i64,
    pub created_at: DateTime<Utc>,
}
