//! # pin-db
//!
//! Storage layer implementing the repository traits of `pin-core`.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool, migrations, `FromRow` models,
//!   model ↔ entity mappers and repositories
//! - In-memory repositories backed by `DashMap` for the `memory` storage
//!   backend and for tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pin_db::{create_pool, run_migrations, PgWhitelistRepository};
//!
//! async fn example(config: &pin_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool, &config.migrations_dir).await?;
//!     let whitelist = PgWhitelistRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryAuditLogRepository, MemorySettingsRepository, MemoryWhitelistRepository};
pub use pool::{create_pool, run_migrations, PgPool, PoolError};
pub use repositories::{PgAuditLogRepository, PgSettingsRepository, PgWhitelistRepository};
