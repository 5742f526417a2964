//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chanlog_common::{AppConfig, AppError};
use chanlog_core::{ChannelSortMode, MessageSortMode};
use chanlog_db::{
    create_pool, run_migrations, SqliteDialogRepository, SqliteMessageRepository,
    SqliteReactionHistoryRepository,
};
use chanlog_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Bad sort-mode strings in the environment abort startup, not requests
    config
        .display
        .channel_sort
        .parse::<ChannelSortMode>()
        .map_err(|e| AppError::Config(e.to_string()))?;
    config
        .display
        .message_sort
        .parse::<MessageSortMode>()
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Create database pool
    info!("Connecting to SQLite...");
    let db_config = chanlog_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("SQLite connection established, schema up to date");

    // Create repositories
    let message_repo = Arc::new(SqliteMessageRepository::new(pool.clone()));
    let reaction_repo = Arc::new(SqliteReactionHistoryRepository::new(pool.clone()));
    let dialog_repo = Arc::new(SqliteDialogRepository::new(pool.clone()));

    let config = Arc::new(config);

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .message_repo(message_repo)
        .reaction_repo(reaction_repo)
        .dialog_repo(dialog_repo)
        .config(Arc::clone(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address {}: {e}", config.api.address())))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
