//! Application state
//!
//! Holds the shared state for the Axum application: the service context and
//! the handles the readiness check uses.

use std::sync::Arc;

use pin_db::PgPool;
use pin_service::ServiceContext;

/// Dependencies checked by `/health/ready`
#[derive(Debug, Clone, Default)]
pub struct HealthTargets {
    /// `None` for the in-memory storage backend
    pub pool: Option<PgPool>,
    /// `None` when no event bus is attached
    pub redis: Option<redis::Client>,
}

impl HealthTargets {
    pub fn new(pool: Option<PgPool>, redis: Option<redis::Client>) -> Self {
        Self { pool, redis }
    }

    /// Storage is reachable (always true for the in-memory backend)
    pub async fn storage_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => pool.acquire().await.is_ok(),
            None => true,
        }
    }

    /// Event bus answers PING
    pub async fn event_bus_healthy(&self) -> bool {
        match &self.redis {
            Some(client) => crate::intake::ping(client).await.is_ok(),
            None => false,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    health: Arc<HealthTargets>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: Arc<ServiceContext>, health: HealthTargets) -> Self {
        Self {
            service_context,
            health: Arc::new(health),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn health(&self) -> &HealthTargets {
        &self.health
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("health", &self.health)
            .finish()
    }
}
