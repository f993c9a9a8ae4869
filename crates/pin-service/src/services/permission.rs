//! Permission service
//!
//! Capability checks for the ReactionPin module. The default policy maps each
//! capability to a set of guild permissions; `ADMINISTRATOR` satisfies all.

use pin_common::ReactionPinConfig;
use pin_core::traits::CapabilityChecker;
use pin_core::{Capability, DomainError, MemberRef, Permissions};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Capability policy backed by member permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyCapabilityChecker {
    pin: Permissions,
    manage: Permissions,
}

impl PolicyCapabilityChecker {
    pub fn new(pin: Permissions, manage: Permissions) -> Self {
        Self { pin, manage }
    }

    pub fn from_config(config: &ReactionPinConfig) -> Self {
        Self::new(config.pin_permissions, config.manage_permissions)
    }

    /// Permissions required for a capability
    pub fn required(&self, capability: Capability) -> Permissions {
        match capability {
            Capability::ReactionPin => self.pin,
            Capability::ReactionPinManage => self.manage,
        }
    }
}

impl CapabilityChecker for PolicyCapabilityChecker {
    fn has_capability(&self, member: &MemberRef, capability: Capability) -> bool {
        member.permissions.has(self.required(capability))
    }
}

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check if a member holds a capability
    #[instrument(skip(self, member), fields(user_id = %member.user_id))]
    pub fn has_capability(&self, member: &MemberRef, capability: Capability) -> bool {
        let granted = self.ctx.capabilities().has_capability(member, capability);
        debug!(granted, "Capability check");
        granted
    }

    /// Check a capability and return error if denied
    pub fn require_capability(&self, member: &MemberRef, capability: Capability) -> ServiceResult<()> {
        if !self.has_capability(member, capability) {
            return Err(DomainError::MissingCapability(capability).into());
        }
        Ok(())
    }
}
