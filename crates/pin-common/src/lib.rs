//! # pin-common
//!
//! Shared utilities including configuration, error handling, telemetry, and
//! the user-facing strings of the ReactionPin module.

pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, LogFormat, PlatformConfig,
    ReactionPinConfig, RedisConfig, ServerConfig, StorageBackend, StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use i18n::{Translations, TranslationsError};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
