//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{dialogs, forward, health, messages, reactions};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(dialog_routes())
        .merge(message_routes())
        .merge(reaction_routes())
        .merge(forward_routes())
}

/// Dialog routes
fn dialog_routes() -> Router<AppState> {
    Router::new()
        .route("/dialogs", get(dialogs::list_dialogs))
        .route("/dialogs/selected", get(dialogs::list_selected))
        .route("/dialogs/:dialog_id/selected", put(dialogs::set_selected))
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(messages::get_messages))
        .route("/messages/stats", get(messages::get_stats))
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new().route("/reactions/changes", get(reactions::get_changes))
}

/// Forward routes
fn forward_routes() -> Router<AppState> {
    Router::new().route("/forward", post(forward::forward))
}
