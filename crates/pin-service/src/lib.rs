//! # pin-service
//!
//! Application layer for ReactionPin: executes pin engine decisions against
//! the chat platform, administers the channel whitelist, and parses and runs
//! the `reactionpin` command group.

pub mod commands;
pub mod dto;
pub mod services;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use services::{
    ChangelogService, CommandService, PermissionService, PinController, PolicyCapabilityChecker,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SettingsService,
    WhitelistAdmin,
};
