//! Reaction-change reporting
//!
//! Loads snapshot history, runs the delta detector per channel, and joins
//! the detected movements back onto their archived messages.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tracing::{debug, instrument};
use validator::Validate;

use chanlog_core::entities::ReactionSnapshot;
use chanlog_core::value_objects::{ChannelId, MessageId};
use chanlog_core::{detect_changes, ReactionChange};

use crate::dto::{MessageBody, OutputDocument, ReactionChangeBody, ReactionChangesQuery, ReactionDelta};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction-change reporting service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Detect reaction movements within the lookback window
    ///
    /// Returns the effective window and the annotated messages, ordered by
    /// delta descending then message id.
    #[instrument(skip(self, query))]
    pub async fn changes(
        &self,
        query: &ReactionChangesQuery,
    ) -> ServiceResult<(u32, Vec<ReactionChangeBody>)> {
        query
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let window_hours = query
            .window_hours
            .unwrap_or(self.ctx.config().display.reaction_window_hours);

        let channel_filter = query.channel_id.map(ChannelId::new);
        let snapshots = self.ctx.reaction_repo().history(channel_filter).await?;

        // Message ids are only unique per channel, so detection runs per
        // channel. BTreeMap keeps channel order deterministic.
        let mut by_channel: BTreeMap<ChannelId, HashMap<MessageId, Vec<ReactionSnapshot>>> =
            BTreeMap::new();
        for snapshot in snapshots {
            by_channel
                .entry(snapshot.channel_id)
                .or_default()
                .entry(snapshot.message_id)
                .or_default()
                .push(snapshot);
        }

        let now = Utc::now();
        let mut bodies = Vec::new();
        for (channel_id, history) in &by_channel {
            let changes = detect_changes(history, window_hours, now);
            debug!(channel_id = %channel_id, changes = changes.len(), "detected reaction changes");

            for change in changes {
                if let Some(body) = self.annotate(*channel_id, change).await? {
                    bodies.push(body);
                }
            }
        }

        bodies.sort_by(|a, b| {
            b.reactions
                .change
                .cmp(&a.reactions.change)
                .then(a.message.id.cmp(&b.message.id))
        });

        Ok((window_hours, bodies))
    }

    /// Shape a reaction report as an output document
    pub async fn changes_document(
        &self,
        query: &ReactionChangesQuery,
    ) -> ServiceResult<OutputDocument> {
        let (period_hours, messages) = self.changes(query).await?;
        Ok(OutputDocument::Reactions {
            period_hours,
            messages,
        })
    }

    /// Join one detected change onto its archived message
    ///
    /// A change whose message has since been purged from the archive is
    /// dropped silently; history outliving messages is expected.
    async fn annotate(
        &self,
        channel_id: ChannelId,
        change: ReactionChange,
    ) -> ServiceResult<Option<ReactionChangeBody>> {
        let Some(message) = self
            .ctx
            .message_repo()
            .find(change.message_id, channel_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(ReactionChangeBody {
            message: MessageBody::from(&message),
            reactions: ReactionDelta {
                old: change.baseline_count,
                new: change.current_count,
                change: change.delta,
            },
        }))
    }
}
