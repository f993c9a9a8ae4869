//! Server setup and initialization
//!
//! Wires storage, the platform adapter, the event intake and the HTTP server
//! together.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use response::{ApiError, ApiResult, ErrorBody, ErrorDetail};
pub use state::{AppState, HealthTargets};

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use pin_common::{AppConfig, AppError, StorageBackend, Translations};
use pin_core::{AuditLogRepository, ChatPlatform, SettingsRepository, WhitelistRepository};
use pin_db::{
    create_pool, run_migrations, MemoryAuditLogRepository, MemorySettingsRepository,
    MemoryWhitelistRepository, PgAuditLogRepository, PgPool, PgSettingsRepository,
    PgWhitelistRepository,
};
use pin_service::{PolicyCapabilityChecker, ServiceContext};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::intake::{EventDispatcher, EventSubscriber, ReactionPinListener, SubscriberConfig};
use crate::platform::RestPlatform;
use middleware::apply_middleware;
use routes::{create_router, health_routes};

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Repositories for the selected storage backend
pub struct Stores {
    pub whitelist: Arc<dyn WhitelistRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub audit: Arc<dyn AuditLogRepository>,
    /// Set for the PostgreSQL backend
    pub pool: Option<PgPool>,
}

impl Stores {
    /// In-memory stores, lost on restart
    pub fn memory() -> Self {
        Self {
            whitelist: Arc::new(MemoryWhitelistRepository::new()),
            settings: Arc::new(MemorySettingsRepository::new()),
            audit: Arc::new(MemoryAuditLogRepository::new()),
            pool: None,
        }
    }

    /// Connect to PostgreSQL and apply migrations
    pub async fn postgres(config: &AppConfig) -> Result<Self, AppError> {
        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| AppError::Config("DATABASE_URL is required for the postgres backend".to_string()))?;

        info!("Connecting to PostgreSQL...");
        let pool = create_pool(db_config)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        run_migrations(&pool, &db_config.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("PostgreSQL connection established");

        Ok(Self {
            whitelist: Arc::new(PgWhitelistRepository::new(pool.clone())),
            settings: Arc::new(PgSettingsRepository::new(pool.clone())),
            audit: Arc::new(PgAuditLogRepository::new(pool.clone())),
            pool: Some(pool),
        })
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        match config.storage.backend {
            StorageBackend::Postgres => Self::postgres(config).await,
            StorageBackend::Memory => {
                warn!("Using in-memory storage; whitelist and settings are lost on restart");
                Ok(Self::memory())
            }
        }
    }
}

/// Build the service context over `stores` and `platform`
pub fn create_service_context(
    config: &AppConfig,
    stores: &Stores,
    platform: Arc<dyn ChatPlatform>,
    translations: Translations,
) -> Result<ServiceContext, AppError> {
    ServiceContext::builder()
        .whitelist_repo(stores.whitelist.clone())
        .settings_repo(stores.settings.clone())
        .audit_repo(stores.audit.clone())
        .platform(platform)
        .capabilities(Arc::new(PolicyCapabilityChecker::from_config(&config.reactionpin)))
        .translations(translations)
        .bot_user_id(config.platform.bot_user_id)
        .changelog_channel(config.reactionpin.changelog_channel_id)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Run the HTTP server until `shutdown` resolves
pub async fn run_server(
    app: Router,
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the bot with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let translations = Translations::load(config.reactionpin.translations_path.as_deref())?;
    let stores = Stores::from_config(&config).await?;
    let platform = RestPlatform::new(&config.platform).map_err(|e| AppError::Platform(e.to_string()))?;
    let ctx = Arc::new(create_service_context(
        &config,
        &stores,
        Arc::new(platform),
        translations,
    )?);

    // Event intake
    let dispatcher = Arc::new(
        EventDispatcher::new().with_listener(Arc::new(ReactionPinListener::new(ctx.clone()))),
    );
    let subscriber = EventSubscriber::new(SubscriberConfig::from(&config.redis), dispatcher)
        .map_err(|e| AppError::EventBus(e.to_string()))?;
    let health = HealthTargets::new(stores.pool.clone(), Some(subscriber.client().clone()));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let intake = tokio::spawn(subscriber.run(shutdown_rx));
    info!(channel = %config.redis.events_channel, "Event intake started");

    // Command and health server
    let addr = config.http.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;
    let app = create_app(AppState::new(ctx, health));
    let result = run_server(app, listener, shutdown_signal()).await;

    // Stop intake once the server is gone
    shutdown_tx.send(true).ok();
    if let Err(e) = intake.await {
        warn!(error = %e, "Event intake task failed");
    }
    result
}
