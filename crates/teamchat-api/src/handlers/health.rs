//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let database = match &state.db_pool {
        Some(pool) => pool.ping().await.as_str(),
        None => "in_memory",
    };

    let status = if database == "unreachable" {
        "degraded"
    } else {
        "ok"
    };

    Json(ApiResponse::ok(DetailedHealthResponse {
        status: status.to_string(),
        database: database.to_string(),
    }))
}
