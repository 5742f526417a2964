//! Service context - dependency container for services
//!
//! Holds the repositories, configuration, and shared clients needed by services.

use std::sync::Arc;
use std::time::Duration;

use chanlog_common::AppConfig;
use chanlog_core::traits::{DialogRepository, MessageRepository, ReactionHistoryRepository};
use chanlog_db::SqlitePool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Application configuration
/// - The outbound HTTP client used for forwarding
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Repositories
    message_repo: Arc<dyn MessageRepository>,
    reaction_repo: Arc<dyn ReactionHistoryRepository>,
    dialog_repo: Arc<dyn DialogRepository>,

    // Configuration
    config: Arc<AppConfig>,

    // Outbound HTTP
    http_client: reqwest::Client,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        message_repo: Arc<dyn MessageRepository>,
        reaction_repo: Arc<dyn ReactionHistoryRepository>,
        dialog_repo: Arc<dyn DialogRepository>,
        config: Arc<AppConfig>,
    ) -> ServiceResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.forward.timeout_secs))
            .build()
            .map_err(|e| ServiceError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            pool,
            message_repo,
            reaction_repo,
            dialog_repo,
            config,
            http_client,
        })
    }

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the reaction history repository
    pub fn reaction_repo(&self) -> &dyn ReactionHistoryRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the dialog repository
    pub fn dialog_repo(&self) -> &dyn DialogRepository {
        self.dialog_repo.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the outbound HTTP client
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    reaction_repo: Option<Arc<dyn ReactionHistoryRepository>>,
    dialog_repo: Option<Arc<dyn DialogRepository>>,
    config: Option<Arc<AppConfig>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            message_repo: None,
            reaction_repo: None,
            dialog_repo: None,
            config: None,
        }
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionHistoryRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn dialog_repo(mut self, repo: Arc<dyn DialogRepository>) -> Self {
        self.dialog_repo = Some(repo);
        self
    }

    pub fn config(mut self, config: Arc<AppConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.dialog_repo
                .ok_or_else(|| ServiceError::validation("dialog_repo is required"))?,
            self.config
                .ok_or_else(|| ServiceError::validation("config is required"))?,
        )
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
