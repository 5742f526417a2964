//! Reaction-change report handler

use axum::extract::{Query, State};
use chanlog_service::dto::{OutputDocument, ReactionChangesQuery};
use chanlog_service::ReactionService;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Reaction movements within the lookback window
///
/// GET /api/v1/reactions/changes
pub async fn get_changes(
    State(state): State<AppState>,
    Query(query): Query<ReactionChangesQuery>,
) -> ApiResult<ApiJson<OutputDocument>> {
    let document = ReactionService::new(state.service_context())
        .changes_document(&query)
        .await?;
    Ok(ApiJson(document))
}
