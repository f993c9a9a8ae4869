//! Permissions bitflags as resolved by the chat platform for a guild member
//!
//! Bit positions follow Discord's permission field, so the value delivered
//! with a member can be used as-is. Only the flags ReactionPin can be
//! configured with are named; other bits are dropped on decode.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Discord permission flags
    ///
    /// Serialized as string in JSON for JavaScript safety.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        /// Bypass all permission checks
        const ADMINISTRATOR    = 1 << 3;
        /// Create, edit, delete channels
        const MANAGE_CHANNELS  = 1 << 4;
        /// Edit guild settings
        const MANAGE_GUILD     = 1 << 5;
        /// Delete other users' messages, pin and unpin
        const MANAGE_MESSAGES  = 1 << 13;
        /// Create, edit, delete, assign roles
        const MANAGE_ROLES     = 1 << 28;
    }
}

/// Flag names in bit order, used for config parsing and error messages
const NAMES: [(&str, Permissions); 5] = [
    ("ADMINISTRATOR", Permissions::ADMINISTRATOR),
    ("MANAGE_CHANNELS", Permissions::MANAGE_CHANNELS),
    ("MANAGE_GUILD", Permissions::MANAGE_GUILD),
    ("MANAGE_MESSAGES", Permissions::MANAGE_MESSAGES),
    ("MANAGE_ROLES", Permissions::MANAGE_ROLES),
];

impl Permissions {
    /// Check if the permission set contains a required permission
    ///
    /// Administrators bypass all permission checks.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permission)
    }

    /// Get a list of all individual permissions that are set
    pub fn list(&self) -> Vec<&'static str> {
        NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Parse a comma separated list of flag names (`"MANAGE_MESSAGES,MANAGE_GUILD"`)
    ///
    /// A plain decimal bitfield is accepted as well.
    pub fn parse_names(s: &str) -> Result<Self, UnknownPermission> {
        if let Ok(bits) = s.trim().parse::<u64>() {
            return Ok(Permissions::from_bits_truncate(bits));
        }

        let mut permissions = Permissions::empty();
        for raw in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let flag = NAMES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(raw))
                .map(|(_, flag)| *flag)
                .ok_or_else(|| UnknownPermission(raw.to_string()))?;
            permissions |= flag;
        }
        Ok(permissions)
    }
}

/// Error for an unrecognised permission flag name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission: {0}")]
pub struct UnknownPermission(pub String);

impl Default for Permissions {
    fn default() -> Self {
        Permissions::empty()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.bits().to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PermissionsVisitor;

        impl Visitor<'_> for PermissionsVisitor {
            type Value = Permissions;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing permission bits")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Permissions, E>
            where
                E: de::Error,
            {
                Ok(Permissions::from_bits_truncate(value as u64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Permissions, E>
            where
                E: de::Error,
            {
                Ok(Permissions::from_bits_truncate(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Permissions, E>
            where
                E: de::Error,
            {
                value
                    .parse::<u64>()
                    .map(Permissions::from_bits_truncate)
                    .map_err(|_| de::Error::custom("invalid permissions string"))
            }
        }

        deserializer.deserialize_any(PermissionsVisitor)
    }
}
