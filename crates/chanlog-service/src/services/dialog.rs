//! Dialog listing and selection

use tracing::{info, instrument};

use chanlog_core::value_objects::ChannelId;
use chanlog_core::{sort_dialogs, ChannelSortMode};

use crate::dto::DialogBody;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Dialog service
pub struct DialogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DialogService<'a> {
    /// Create a new DialogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all known dialogs, sorted by the requested or configured mode
    #[instrument(skip(self))]
    pub async fn list(&self, sort: Option<&str>) -> ServiceResult<Vec<DialogBody>> {
        let mode = sort
            .unwrap_or(&self.ctx.config().display.channel_sort)
            .parse::<ChannelSortMode>()?;

        let mut dialogs = self.ctx.dialog_repo().list().await?;
        sort_dialogs(&mut dialogs, mode);

        Ok(dialogs.iter().map(DialogBody::from).collect())
    }

    /// List the selected dialogs only
    #[instrument(skip(self))]
    pub async fn selected(&self) -> ServiceResult<Vec<DialogBody>> {
        let dialogs = self.ctx.dialog_repo().selected().await?;
        Ok(dialogs.iter().map(DialogBody::from).collect())
    }

    /// Mark a dialog as selected or unselected
    #[instrument(skip(self))]
    pub async fn set_selected(&self, id: i64, selected: bool) -> ServiceResult<()> {
        self.ctx
            .dialog_repo()
            .set_selected(ChannelId::new(id), selected)
            .await?;
        info!(dialog_id = id, selected, "dialog selection updated");
        Ok(())
    }
}
