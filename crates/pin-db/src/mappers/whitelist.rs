//! Whitelist entry <-> model mapper

use pin_core::entities::WhitelistEntry;
use pin_core::value_objects::Snowflake;

use crate::models::WhitelistChannelModel;

/// Convert WhitelistChannelModel to WhitelistEntry entity
impl From<WhitelistChannelModel> for WhitelistEntry {
    fn from(model: WhitelistChannelModel) -> Self {
        WhitelistEntry::new(Snowflake::new(model.channel_id))
    }
}
