//! Document forwarding handler

use axum::{extract::State, Json};
use chanlog_service::dto::{ForwardReceipt, ForwardRequest};
use chanlog_service::ForwardService;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Assemble a document and POST it to an external destination
///
/// POST /api/v1/forward
pub async fn forward(
    State(state): State<AppState>,
    Json(request): Json<ForwardRequest>,
) -> ApiResult<ApiJson<ForwardReceipt>> {
    let receipt = ForwardService::new(state.service_context())
        .forward(&request)
        .await?;
    Ok(ApiJson(receipt))
}
