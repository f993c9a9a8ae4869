//! Data transfer objects for the command and health endpoints
//!
//! This module provides:
//! - Request DTOs for command invocations
//! - Response DTOs for replies and health checks
//! - Mappers from service errors to reply embeds

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::error_embed;
pub use requests::CommandRequest;
pub use responses::{CommandReply, HealthChecks, HealthResponse, ReadinessResponse};
