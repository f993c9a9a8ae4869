//! Value objects - immutable types that represent domain concepts

mod capability;
mod permissions;
mod snowflake;

pub use capability::Capability;
pub use permissions::{Permissions, UnknownPermission};
pub use snowflake::{Snowflake, SnowflakeParseError};
