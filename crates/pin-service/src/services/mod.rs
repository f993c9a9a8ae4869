//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` and orchestrates domain
//! decisions with the repositories and the chat platform.

pub mod changelog;
pub mod command;
pub mod context;
pub mod error;
pub mod permission;
pub mod pin;
pub mod settings;
pub mod whitelist;

// Re-export all services for convenience
pub use changelog::ChangelogService;
pub use command::CommandService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use permission::{PermissionService, PolicyCapabilityChecker};
pub use pin::PinController;
pub use settings::SettingsService;
pub use whitelist::{PinNotificationState, WhitelistAdmin, WhitelistListing};
