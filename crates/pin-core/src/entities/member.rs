//! Member reference - the reacting or invoking guild member

use serde::{Deserialize, Serialize};

use crate::value_objects::{Permissions, Snowflake};

/// Guild member as delivered with an event or command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    #[serde(rename = "id")]
    pub user_id: Snowflake,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    /// Guild-level permissions resolved by the platform
    #[serde(default)]
    pub permissions: Permissions,
}

impl MemberRef {
    /// Create a human member with no roles and no permissions
    pub fn new(user_id: Snowflake) -> Self {
        Self {
            user_id,
            bot: false,
            roles: Vec::new(),
            permissions: Permissions::empty(),
        }
    }

    /// Create a bot member
    pub fn bot(user_id: Snowflake) -> Self {
        Self {
            bot: true,
            ..Self::new(user_id)
        }
    }

    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Snowflake>) -> Self {
        self.roles = roles;
        self
    }

    #[must_use]
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Check if member has a specific role
    #[inline]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.roles.contains(&role_id)
    }

    /// Whether the member holds the configured mute role
    ///
    /// No mute role configured means nobody is muted.
    #[inline]
    pub fn is_muted(&self, mute_role: Option<Snowflake>) -> bool {
        mute_role.is_some_and(|role| self.has_role(role))
    }
}
