//! Message listing, assembly, and statistics handlers

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chanlog_core::value_objects::ChannelId;
use chanlog_service::dto::{MessagesQuery, OutputDocument, StatsResponse};
use chanlog_service::{ArchiveService, AssemblerService};
use serde::Deserialize;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Assemble and return the message document for a query
///
/// GET /api/v1/messages
pub async fn get_messages(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> ApiResult<Response> {
    let document = AssemblerService::new(state.service_context())
        .assemble(&query)
        .await?;

    // The text format is served as plain text, everything else as JSON
    match document {
        OutputDocument::Text(body) => Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()),
        other => Ok(ApiJson(other).into_response()),
    }
}

/// Query parameters for archive statistics
#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    /// Restrict the counters and chains to one channel
    pub channel_id: Option<i64>,
}

/// Archive and chain statistics
///
/// GET /api/v1/messages/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> ApiResult<ApiJson<StatsResponse>> {
    let stats = ArchiveService::new(state.service_context())
        .stats(query.channel_id.map(ChannelId::new))
        .await?;
    Ok(ApiJson(stats))
}
