//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use teamchat_auth::resolver::AuthResolver;
use teamchat_core::config::AppConfig;
use teamchat_database::DatabasePool;
use teamchat_service::presence::PresenceService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool. The server always sets it; router tests on the
    /// in-memory stores leave it empty.
    pub db_pool: Option<DatabasePool>,
    /// Bearer token → principal
    pub auth_resolver: Arc<dyn AuthResolver>,
    /// Presence tracker
    pub presence_service: Arc<PresenceService>,
}
