//! Dialog listing and selection handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chanlog_service::dto::DialogBody;
use chanlog_service::DialogService;
use serde::Deserialize;

use crate::response::{ApiJson, ApiResult, NoContent};
use crate::state::AppState;

/// Query parameters for dialog listing
#[derive(Debug, Default, Deserialize)]
pub struct DialogsQuery {
    /// Channel sort mode; defaults to the configured mode
    pub sort: Option<String>,
}

/// Request body for dialog selection
#[derive(Debug, Deserialize)]
pub struct SelectBody {
    pub selected: bool,
}

/// List all known dialogs
///
/// GET /api/v1/dialogs
pub async fn list_dialogs(
    State(state): State<AppState>,
    Query(query): Query<DialogsQuery>,
) -> ApiResult<ApiJson<Vec<DialogBody>>> {
    let dialogs = DialogService::new(state.service_context())
        .list(query.sort.as_deref())
        .await?;
    Ok(ApiJson(dialogs))
}

/// List the selected dialogs only
///
/// GET /api/v1/dialogs/selected
pub async fn list_selected(State(state): State<AppState>) -> ApiResult<ApiJson<Vec<DialogBody>>> {
    let dialogs = DialogService::new(state.service_context()).selected().await?;
    Ok(ApiJson(dialogs))
}

/// Mark a dialog as selected or unselected
///
/// PUT /api/v1/dialogs/:dialog_id/selected
pub async fn set_selected(
    State(state): State<AppState>,
    Path(dialog_id): Path<i64>,
    Json(body): Json<SelectBody>,
) -> ApiResult<NoContent> {
    DialogService::new(state.service_context())
        .set_selected(dialog_id, body.selected)
        .await?;
    Ok(NoContent)
}
