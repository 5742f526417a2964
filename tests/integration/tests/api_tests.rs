//! API integration tests
//!
//! Each test spins up the full Axum application over a throwaway SQLite
//! database, seeds it through the service layer, and exercises the HTTP
//! surface end to end.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::http::StatusCode;
use chanlog_core::{DialogKind, DialogRepository};
use chanlog_service::ArchiveService;
use integration_tests::{
    assert_json, assert_status, dialog, message, test_config, test_state, temp_db_url,
    ChannelsDocumentJson, DialogJson, ErrorResponse, FlatChannelsDocumentJson, FlatDocumentJson,
    ForwardReceiptJson, ForwardSink, HealthJson, ReactionsDocumentJson, ReadinessJson,
    SingleDocumentJson, StatsJson, TestServer,
};
use serde_json::json;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("start server");
    let response = server.get("/health").await.expect("request");
    let health: HealthJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("start server");
    let response = server.get("/health/ready").await.expect("request");
    let ready: ReadinessJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(ready.ready);
    assert!(ready.database);
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_empty_archive_yields_empty_document() {
    let server = TestServer::start().await.expect("start server");
    let response = server.get("/api/v1/messages").await.expect("request");
    let doc: SingleDocumentJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(doc.standalone_messages.is_empty());
    assert!(doc.chains.is_empty());
}

#[tokio::test]
async fn test_single_channel_chain_document() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![
            message(1, 7).at_minutes(0).build(),
            message(2, 7).at_minutes(1).reply_to(1).build(),
            message(3, 7).at_minutes(2).reply_to(2).build(),
            message(4, 7).at_minutes(3).build(),
        ])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server.get("/api/v1/messages").await.expect("request");
    let doc: SingleDocumentJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(doc.chains.len(), 1);
    assert_eq!(doc.chains[0].root.id, 1);
    let reply_ids: Vec<i64> = doc.chains[0].replies.iter().map(|m| m.id).collect();
    assert_eq!(reply_ids, vec![2, 3]);

    assert_eq!(doc.standalone_messages.len(), 1);
    assert_eq!(doc.standalone_messages[0].id, 4);
}

#[tokio::test]
async fn test_multi_channel_document_wrapped() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![
            message(1, 7).at_minutes(0).build(),
            message(1, 8).at_minutes(1).build(),
        ])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server.get("/api/v1/messages").await.expect("request");
    let doc: ChannelsDocumentJson = assert_json(response, StatusCode::OK).await.unwrap();

    let mut channel_ids: Vec<i64> = doc.channels.iter().map(|c| c.channel_id).collect();
    channel_ids.sort_unstable();
    assert_eq!(channel_ids, vec![7, 8]);
}

#[tokio::test]
async fn test_channel_filter_narrows_working_set() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![
            message(1, 7).at_minutes(0).build(),
            message(1, 8).at_minutes(1).build(),
        ])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server
        .get("/api/v1/messages?channel_id=7")
        .await
        .expect("request");
    let doc: SingleDocumentJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(doc.standalone_messages.len(), 1);
    assert_eq!(doc.standalone_messages[0].channel_id, 7);
}

#[tokio::test]
async fn test_flat_format_skips_chains() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![
            message(1, 7).at_minutes(0).build(),
            message(2, 7).at_minutes(1).reply_to(1).build(),
        ])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server
        .get("/api/v1/messages?format=json-no-chains")
        .await
        .expect("request");
    let doc: FlatDocumentJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(doc.messages.len(), 2);
    assert_eq!(doc.messages[1].reply_to_msg_id, Some(1));
}

#[tokio::test]
async fn test_flat_format_wraps_multiple_channels() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![
            message(1, 7).at_minutes(0).build(),
            message(1, 8).at_minutes(1).build(),
            message(2, 7).at_minutes(2).build(),
        ])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server
        .get("/api/v1/messages?format=json-no-chains")
        .await
        .expect("request");
    let doc: FlatChannelsDocumentJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(doc.channels.len(), 2);
    assert_eq!(doc.channels[0].channel_id, 7);
    assert_eq!(doc.channels[0].messages.len(), 2);
    assert_eq!(doc.channels[1].channel_id, 8);
    assert_eq!(doc.channels[1].messages.len(), 1);
}

#[tokio::test]
async fn test_text_format_served_as_plain_text() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![message(1, 7).content("hello there").sender(10, "ann").build()])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server
        .get("/api/v1/messages?format=text")
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");

    let body = response.text().await.expect("body");
    assert!(body.contains("hello there"));
    assert!(body.contains("@ann"));
}

#[tokio::test]
async fn test_unknown_format_rejected() {
    let server = TestServer::start().await.expect("start server");
    let response = server
        .get("/api/v1/messages?format=yaml")
        .await
        .expect("request");
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = TestServer::start().await.expect("start server");
    let response = server.get("/api/v1/nope").await.expect("request");
    assert_eq!(response.status().as_u16(), 404);
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_stats_counts() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![
            message(1, 7).at_minutes(0).sender(10, "ann").build(),
            message(2, 7).at_minutes(1).reply_to(1).sender(11, "bob").build(),
            message(1, 8).at_minutes(2).sender(10, "ann").build(),
        ])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server.get("/api/v1/messages/stats").await.expect("request");
    let stats: StatsJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.archive.message_count, 3);
    assert_eq!(stats.archive.channel_count, 2);
    assert_eq!(stats.archive.sender_count, 2);
    assert_eq!(stats.archive.reply_count, 1);
    assert_eq!(stats.chains.chain_count, 1);
    assert_eq!(stats.chains.max_depth, 2);
}

#[tokio::test]
async fn test_stats_scoped_to_channel() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![
            message(1, 7).at_minutes(0).build(),
            message(1, 8).at_minutes(1).build(),
            message(2, 8).at_minutes(2).reply_to(1).build(),
        ])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server
        .get("/api/v1/messages/stats?channel_id=8")
        .await
        .expect("request");
    let stats: StatsJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.archive.message_count, 2);
    assert_eq!(stats.archive.channel_count, 1);
    assert_eq!(stats.archive.reply_count, 1);
    assert_eq!(stats.chains.chain_count, 1);
}

// ============================================================================
// Dialogs
// ============================================================================

#[tokio::test]
async fn test_dialog_selection_roundtrip() {
    let state = test_state().await.expect("state");
    state
        .service_context()
        .dialog_repo()
        .upsert(&dialog(7, "news", DialogKind::Channel, false))
        .await
        .expect("seed dialog");
    state
        .service_context()
        .dialog_repo()
        .upsert(&dialog(8, "chatter", DialogKind::Group, false))
        .await
        .expect("seed dialog");
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server
        .put("/api/v1/dialogs/7/selected", &json!({"selected": true}))
        .await
        .expect("request");
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/v1/dialogs/selected").await.expect("request");
    let selected: Vec<DialogJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, 7);
    assert!(selected[0].is_selected);
}

#[tokio::test]
async fn test_select_unknown_dialog_is_404() {
    let server = TestServer::start().await.expect("start server");
    let response = server
        .put("/api/v1/dialogs/999/selected", &json!({"selected": true}))
        .await
        .expect("request");
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_DIALOG");
}

#[tokio::test]
async fn test_dialogs_sorted_by_name() {
    let state = test_state().await.expect("state");
    for d in [
        dialog(1, "zebra", DialogKind::Channel, false),
        dialog(2, "Alpha", DialogKind::Group, false),
        dialog(3, "mango", DialogKind::Private, false),
    ] {
        state
            .service_context()
            .dialog_repo()
            .upsert(&d)
            .await
            .expect("seed dialog");
    }
    let server = TestServer::start_with_state(state).await.expect("start server");

    let response = server.get("/api/v1/dialogs?sort=name").await.expect("request");
    let dialogs: Vec<DialogJson> = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = dialogs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "mango", "zebra"]);
}

#[tokio::test]
async fn test_unknown_dialog_sort_rejected() {
    let server = TestServer::start().await.expect("start server");
    let response = server
        .get("/api/v1/dialogs?sort=sideways")
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 400);
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_reaction_changes_empty() {
    let server = TestServer::start().await.expect("start server");
    let response = server
        .get("/api/v1/reactions/changes")
        .await
        .expect("request");
    let doc: ReactionsDocumentJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(doc.period_hours, 24);
    assert!(doc.messages.is_empty());
}

#[tokio::test]
async fn test_reaction_change_reported() {
    let state = test_state().await.expect("state");
    let archive = ArchiveService::new(state.service_context());

    // Two ingests of the same message snapshot its count twice
    archive
        .ingest(vec![message(1, 7).reactions(5).build()])
        .await
        .expect("ingest");
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    archive
        .ingest(vec![message(1, 7).reactions(9).build()])
        .await
        .expect("ingest");

    let server = TestServer::start_with_state(state).await.expect("start server");
    let response = server
        .get("/api/v1/reactions/changes?window_hours=24")
        .await
        .expect("request");
    let doc: ReactionsDocumentJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(doc.messages.len(), 1);
    assert_eq!(doc.messages[0].id, 1);
    assert_eq!(doc.messages[0].reactions.old, 5);
    assert_eq!(doc.messages[0].reactions.new, 9);
    assert_eq!(doc.messages[0].reactions.change, 4);
}

#[tokio::test]
async fn test_reaction_window_out_of_range_rejected() {
    let server = TestServer::start().await.expect("start server");
    let response = server
        .get("/api/v1/reactions/changes?window_hours=0")
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 400);
}

// ============================================================================
// Forwarding
// ============================================================================

#[tokio::test]
async fn test_forward_delivers_document() {
    let state = test_state().await.expect("state");
    ArchiveService::new(state.service_context())
        .ingest(vec![
            message(1, 7).at_minutes(0).build(),
            message(2, 7).at_minutes(1).reply_to(1).build(),
        ])
        .await
        .expect("ingest");
    let server = TestServer::start_with_state(state).await.expect("start server");
    let sink = ForwardSink::start().await.expect("start sink");

    let response = server
        .post(
            "/api/v1/forward",
            &json!({"url": sink.url(), "channel_id": 7}),
        )
        .await
        .expect("request");
    let receipt: ForwardReceiptJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.destination, sink.url());

    let received = sink.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["chains"][0]["root"]["id"], 1);
}

#[tokio::test]
async fn test_forward_without_destination_rejected() {
    let server = TestServer::start().await.expect("start server");
    let response = server.post("/api/v1/forward", &json!({})).await.expect("request");
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
}

// ============================================================================
// Startup
// ============================================================================

#[tokio::test]
async fn test_run_rejects_malformed_bind_host() {
    let mut config = test_config(&temp_db_url());
    config.api.host = "not-an-ip".to_string();

    let err = chanlog_api::run(config).await.expect_err("must fail");
    assert!(err.to_string().contains("bind address"), "got: {err}");
}
