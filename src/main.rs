//! TeamChat presence server.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use teamchat_api::{AppState, build_router};
use teamchat_auth::jwt::JwtDecoder;
use teamchat_core::clock::SystemClock;
use teamchat_core::config::AppConfig;
use teamchat_core::error::AppError;
use teamchat_database::DatabasePool;
use teamchat_database::repositories::{MemberRepository, PresenceRepository};
use teamchat_service::presence::PresenceService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TEAMCHAT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load(&env)?;
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TeamChat presence server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        teamchat_database::migration::run_migrations(db_pool.pool()).await?;
    }

    // ── Step 2: Repositories ─────────────────────────────────────
    let presence_repo = Arc::new(PresenceRepository::new(db_pool.pool().clone()));
    let member_repo = Arc::new(MemberRepository::new(db_pool.pool().clone()));

    // ── Step 3: Auth + services ──────────────────────────────────
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let presence_service = Arc::new(PresenceService::new(
        presence_repo,
        member_repo,
        Arc::new(SystemClock),
        &config.presence,
    ));

    tracing::info!(
        threshold_ms = config.presence.threshold_ms,
        heartbeat_interval_ms = config.presence.heartbeat_interval_ms,
        "Presence tracker initialized"
    );

    // ── Step 4: HTTP server ──────────────────────────────────────
    let bind_address = config.server.bind_address();
    let shutdown_grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState {
        config: Arc::new(config),
        db_pool: Some(db_pool.clone()),
        auth_resolver: jwt_decoder,
        presence_service,
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server failed: {e}")))?;

    // ── Step 5: Drain ────────────────────────────────────────────
    tracing::info!("Shutting down, closing database pool");
    db_pool.close_within(shutdown_grace).await;

    tracing::info!("TeamChat presence server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
