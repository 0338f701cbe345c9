//! Route definitions for the TeamChat HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(presence_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Presence endpoints
fn presence_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workspaces/{workspace_id}/presence/heartbeat",
            post(handlers::presence::heartbeat),
        )
        .route(
            "/workspaces/{workspace_id}/presence",
            get(handlers::presence::online_status).delete(handlers::presence::clear_presence),
        )
        .route(
            "/members/{member_id}/presence",
            get(handlers::presence::member_online_status),
        )
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
