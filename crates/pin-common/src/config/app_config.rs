//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use pin_core::{Permissions, Snowflake};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub http: ServerConfig,
    pub storage: StorageConfig,
    /// Present when the PostgreSQL backend is selected
    pub database: Option<DatabaseConfig>,
    pub redis: RedisConfig,
    pub platform: PlatformConfig,
    pub reactionpin: ReactionPinConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl AppSettings {
    /// Explicit `LOG_FORMAT` wins, otherwise JSON in production only
    #[must_use]
    pub fn json_logs(&self) -> bool {
        match self.log_format {
            Some(format) => format == LogFormat::Json,
            None => self.env.is_production(),
        }
    }
}

/// HTTP server configuration (commands and health)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// Redis event bus configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_url")]
    pub url: String,
    #[serde(default = "default_events_channel")]
    pub events_channel: String,
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
}

/// Chat platform REST configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    pub api_url: String,
    pub bot_token: String,
    #[serde(default = "default_platform_timeout")]
    pub timeout_secs: u64,
    /// The bot's own user id
    pub bot_user_id: Snowflake,
}

/// ReactionPin module configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionPinConfig {
    /// Permissions granting pin/unpin on any message
    #[serde(default = "default_pin_permissions")]
    pub pin_permissions: Permissions,
    /// Permissions granting whitelist administration
    #[serde(default = "default_manage_permissions")]
    pub manage_permissions: Permissions,
    #[serde(default)]
    pub changelog_channel_id: Option<Snowflake>,
    #[serde(default)]
    pub translations_path: Option<String>,
}

impl Default for ReactionPinConfig {
    fn default() -> Self {
        Self {
            pin_permissions: default_pin_permissions(),
            manage_permissions: default_manage_permissions(),
            changelog_channel_id: None,
            translations_path: None,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "reactionpin".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8090
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_events_channel() -> String {
    "reactionpin:events".to_string()
}

fn default_reconnect_delay_ms() -> u64 {
    1000
}

fn default_platform_timeout() -> u64 {
    10
}

fn default_pin_permissions() -> Permissions {
    Permissions::MANAGE_MESSAGES
}

fn default_manage_permissions() -> Permissions {
    Permissions::MANAGE_GUILD
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let env = match vars.get("APP_ENV") {
            Some(s) => Environment::parse(&s).ok_or(ConfigError::InvalidValue("APP_ENV", s))?,
            None => Environment::default(),
        };
        let log_format = match vars.get("LOG_FORMAT") {
            Some(s) => Some(match s.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::InvalidValue("LOG_FORMAT", s)),
            }),
            None => None,
        };

        let backend = match vars.get("STORAGE_BACKEND") {
            Some(s) => match s.to_lowercase().as_str() {
                "postgres" | "postgresql" => StorageBackend::Postgres,
                "memory" => StorageBackend::Memory,
                _ => return Err(ConfigError::InvalidValue("STORAGE_BACKEND", s)),
            },
            None => StorageBackend::default(),
        };

        let database = match backend {
            StorageBackend::Postgres => Some(DatabaseConfig {
                url: vars.require("DATABASE_URL")?,
                max_connections: vars.parse_or("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: vars.parse_or("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                migrations_dir: vars
                    .get("DATABASE_MIGRATIONS_DIR")
                    .unwrap_or_else(default_migrations_dir),
            }),
            StorageBackend::Memory => None,
        };

        Ok(Self {
            app: AppSettings {
                name: vars.get("APP_NAME").unwrap_or_else(default_app_name),
                env,
                log_format,
            },
            http: ServerConfig {
                host: vars.get("HTTP_HOST").unwrap_or_else(default_host),
                port: vars.parse_or("HTTP_PORT", default_http_port)?,
            },
            storage: StorageConfig { backend },
            database,
            redis: RedisConfig {
                url: vars.get("REDIS_URL").unwrap_or_else(default_redis_url),
                events_channel: vars
                    .get("REDIS_EVENTS_CHANNEL")
                    .unwrap_or_else(default_events_channel),
                reconnect_delay_ms: vars
                    .parse_or("REDIS_RECONNECT_DELAY_MS", default_reconnect_delay_ms)?,
            },
            platform: PlatformConfig {
                api_url: vars.require("PLATFORM_API_URL")?,
                bot_token: vars.require("PLATFORM_BOT_TOKEN")?,
                timeout_secs: vars.parse_or("PLATFORM_TIMEOUT_SECS", default_platform_timeout)?,
                bot_user_id: vars.snowflake("BOT_USER_ID")?.ok_or(ConfigError::MissingVar("BOT_USER_ID"))?,
            },
            reactionpin: ReactionPinConfig {
                pin_permissions: vars
                    .permissions("REACTIONPIN_PIN_PERMISSIONS")?
                    .unwrap_or_else(default_pin_permissions),
                manage_permissions: vars
                    .permissions("REACTIONPIN_MANAGE_PERMISSIONS")?
                    .unwrap_or_else(default_manage_permissions),
                changelog_channel_id: vars.snowflake("CHANGELOG_CHANNEL_ID")?,
                translations_path: vars.get("TRANSLATIONS_PATH"),
            },
        })
    }
}

/// Variable source with typed accessors; blank values count as unset
struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    fn require(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingVar(key))
    }

    fn parse_or<T: std::str::FromStr>(
        &self,
        key: &'static str,
        default: fn() -> T,
    ) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, s)),
            None => Ok(default()),
        }
    }

    fn snowflake(&self, key: &'static str) -> Result<Option<Snowflake>, ConfigError> {
        self.get(key)
            .map(|s| Snowflake::parse(&s).map_err(|_| ConfigError::InvalidValue(key, s)))
            .transpose()
    }

    fn permissions(&self, key: &'static str) -> Result<Option<Permissions>, ConfigError> {
        self.get(key)
            .map(|s| {
                Permissions::parse_names(&s).map_err(|e| ConfigError::InvalidValue(key, e.to_string()))
            })
            .transpose()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
