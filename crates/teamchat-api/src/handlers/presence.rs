//! Presence handlers.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::response::{
    ApiResponse, HeartbeatResponse, MemberPresenceResponse, MessageResponse,
};
use crate::error::ApiError;
use crate::extractors::Caller;
use crate::state::AppState;

/// POST /api/workspaces/{workspace_id}/presence/heartbeat
pub async fn heartbeat(
    State(state): State<AppState>,
    caller: Caller,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<ApiResponse<HeartbeatResponse>>, ApiError> {
    let beat = state
        .presence_service
        .heartbeat(&caller, workspace_id)
        .await?;

    Ok(Json(ApiResponse::ok(HeartbeatResponse {
        member_id: beat.member_id,
        last_seen: beat.last_seen,
        heartbeat_interval_ms: state.config.presence.heartbeat_interval_ms,
    })))
}

/// DELETE /api/workspaces/{workspace_id}/presence
pub async fn clear_presence(
    State(state): State<AppState>,
    caller: Caller,
    Path(workspace_id): Path<Uuid>,
) -> Json<ApiResponse<MessageResponse>> {
    state
        .presence_service
        .clear_presence(&caller, workspace_id)
        .await;

    Json(ApiResponse::ok(MessageResponse {
        message: "Presence cleared".to_string(),
    }))
}

/// GET /api/workspaces/{workspace_id}/presence
pub async fn online_status(
    State(state): State<AppState>,
    caller: Caller,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<ApiResponse<HashMap<Uuid, bool>>>, ApiError> {
    let status = state
        .presence_service
        .online_status(&caller, workspace_id)
        .await?;

    Ok(Json(ApiResponse::ok(status)))
}

/// GET /api/members/{member_id}/presence
pub async fn member_online_status(
    State(state): State<AppState>,
    caller: Caller,
    Path(member_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MemberPresenceResponse>>, ApiError> {
    let online = state
        .presence_service
        .member_online_status(&caller, member_id)
        .await?;

    Ok(Json(ApiResponse::ok(MemberPresenceResponse {
        member_id,
        online,
    })))
}
