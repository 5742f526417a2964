//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers against throwaway SQLite
//! databases, making HTTP requests, and capturing forwarded documents.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chanlog_api::state::AppState;
use chanlog_api::{create_app, create_app_state};
use chanlog_common::{
    AppConfig, AppSettings, DatabaseConfig, DisplayConfig, Environment, ForwardConfig,
    PollerConfig, ServerConfig,
};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;

/// Connection URL for a fresh throwaway database file
pub fn temp_db_url() -> String {
    let path = std::env::temp_dir().join(format!(
        "chanlog-test-{}-{}.db",
        std::process::id(),
        unique_suffix()
    ));
    format!("sqlite://{}", path.display())
}

/// Create a test configuration backed by the given database URL
pub fn test_config(db_url: &str) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "chanlog-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: db_url.to_string(),
            max_connections: 5,
            min_connections: 1,
        },
        display: DisplayConfig {
            channel_sort: "none".to_string(),
            message_sort: "telegram".to_string(),
            reaction_window_hours: 24,
        },
        poller: PollerConfig {
            fetch_limit: 100,
            fetch_pause_secs: 1,
        },
        forward: ForwardConfig {
            url: None,
            timeout_secs: 5,
        },
    }
}

/// Fully initialized application state over a fresh database
pub async fn test_state() -> Result<AppState> {
    test_state_with_config(test_config(&temp_db_url())).await
}

/// Application state for a custom configuration
pub async fn test_state_with_config(config: AppConfig) -> Result<AppState> {
    Ok(create_app_state(config).await?)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server over a fresh database
    pub async fn start() -> Result<Self> {
        Self::start_with_state(test_state().await?).await
    }

    /// Start a test server over prepared state
    ///
    /// Seeding happens against the state's service context before calling
    /// this; the server shares the same pool.
    pub async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.put(&url).json(body).send().await?)
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status.as_u16() != expected_status.as_u16() {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status.as_u16() != expected_status.as_u16() {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

type SinkState = Arc<Mutex<Vec<serde_json::Value>>>;

/// Capturing destination for forwarded documents
///
/// A minimal HTTP endpoint that accepts any JSON POST and stores the body.
pub struct ForwardSink {
    pub addr: SocketAddr,
    received: SinkState,
    _handle: JoinHandle<()>,
}

async fn sink_handler(
    State(received): State<SinkState>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    received.lock().unwrap().push(body);
    StatusCode::OK
}

impl ForwardSink {
    /// Start the sink on an ephemeral port
    pub async fn start() -> Result<Self> {
        let received: SinkState = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/hook", post(sink_handler))
            .with_state(Arc::clone(&received));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            received,
            _handle: handle,
        })
    }

    /// The URL forward requests should target
    pub fn url(&self) -> String {
        format!("http://{}/hook", self.addr)
    }

    /// Documents received so far
    pub fn received(&self) -> Vec<serde_json::Value> {
        self.received.lock().unwrap().clone()
    }
}
