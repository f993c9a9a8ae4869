//! Capabilities checked by the permission subsystem

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named capability of the ReactionPin module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Pin or unpin any message by reaction, in any channel
    ReactionPin,
    /// Administer the whitelist and the pin notification toggle
    ReactionPinManage,
}

impl Capability {
    /// Stable identifier used in logs and error payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReactionPin => "pin",
            Self::ReactionPinManage => "manage-reaction-pin",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
