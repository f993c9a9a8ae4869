//! Response DTOs
//!
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use pin_core::Embed;
use serde::{Deserialize, Serialize};

/// Reply to a command invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReply {
    pub embed: Embed,
}

impl CommandReply {
    /// Reply in the module colour
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            embed: Embed::new(title, Embed::COLOUR_REACTIONPIN).with_description(description),
        }
    }

    /// Titled reply in the error colour
    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            embed: Embed::new(title, Embed::COLOUR_ERROR).with_description(description),
        }
    }

    pub fn is_error(&self) -> bool {
        self.embed.is_error()
    }
}

impl From<Embed> for CommandReply {
    fn from(embed: Embed) -> Self {
        Self { embed }
    }
}

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
    pub event_bus: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool, event_bus_healthy: bool) -> Self {
        let all_healthy = storage_healthy && event_bus_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
                event_bus: if event_bus_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
