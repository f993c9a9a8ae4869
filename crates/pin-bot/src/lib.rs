//! # pin-bot
//!
//! The ReactionPin bot process: consumes platform events from the Redis event
//! bus, executes pin decisions through the platform REST API, and serves the
//! `reactionpin` command group and health checks over HTTP.

pub mod handlers;
pub mod intake;
pub mod platform;
pub mod server;

pub use server::{create_app, run, AppState};
