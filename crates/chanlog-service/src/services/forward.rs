//! Outbound forwarding of assembled documents

use chanlog_core::value_objects::ChannelId;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{ForwardReceipt, ForwardRequest, OutputDocument};

use super::assembler::AssemblerService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Forwarding service
pub struct ForwardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ForwardService<'a> {
    /// Create a new ForwardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assemble a document for the request and POST it to the destination
    ///
    /// The destination is the request URL if given, otherwise the configured
    /// default. A missing destination is a validation error, not a silent
    /// no-op. A request without a channel is confined to the selected
    /// dialogs when any are selected.
    #[instrument(skip(self, request))]
    pub async fn forward(&self, request: &ForwardRequest) -> ServiceResult<ForwardReceipt> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let destination = request
            .url
            .clone()
            .or_else(|| self.ctx.config().forward.url.clone())
            .ok_or_else(|| ServiceError::validation("no forward destination configured"))?;

        let scope = self.resolve_scope(request).await?;
        let document = AssemblerService::new(self.ctx)
            .assemble_within(&request.query, scope.as_deref())
            .await?;
        let receipt = self.send(&destination, &document).await?;

        info!(destination = %receipt.destination, status = receipt.status, "document forwarded");
        Ok(receipt)
    }

    /// Channel scope for a forward request
    ///
    /// An explicit channel wins. Otherwise the selected dialogs bound the
    /// working set; with nothing selected the whole archive is forwarded.
    async fn resolve_scope(&self, request: &ForwardRequest) -> ServiceResult<Option<Vec<ChannelId>>> {
        if request.query.channel_id.is_some() {
            return Ok(None);
        }

        let selected = self.ctx.dialog_repo().selected().await?;
        if selected.is_empty() {
            return Ok(None);
        }

        Ok(Some(selected.into_iter().map(|d| d.id).collect()))
    }

    /// POST a document as JSON to a destination
    async fn send(&self, destination: &str, document: &OutputDocument) -> ServiceResult<ForwardReceipt> {
        let response = self
            .ctx
            .http_client()
            .post(destination)
            .json(document)
            .send()
            .await
            .map_err(|e| ServiceError::upstream(format!("forward request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::upstream(format!(
                "destination returned {status}"
            )));
        }

        Ok(ForwardReceipt {
            destination: destination.to_string(),
            status: status.as_u16(),
        })
    }
}
