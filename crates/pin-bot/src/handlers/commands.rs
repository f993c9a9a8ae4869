//! Command handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use pin_service::dto::{CommandReply, CommandRequest};
use pin_service::CommandService;

use crate::server::{ApiError, ApiResult, AppState};

/// Run a `reactionpin` command
///
/// POST /api/v1/reactionpin/commands
pub async fn run_command(
    State(state): State<AppState>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> ApiResult<Json<CommandReply>> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let ctx = state.service_context();

    CommandService::new(ctx)
        .execute(&request)
        .await
        .map(Json)
        .map_err(|e| ApiError::command(e, ctx.translations()))
}
