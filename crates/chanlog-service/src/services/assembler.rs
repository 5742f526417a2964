//! Document assembly
//!
//! Builds the working set for a query, runs the derivation engines over it
//! (screening, sorting, channel grouping, chain reconstruction), and shapes
//! the result into the requested output document.

use tracing::{instrument, warn};

use chanlog_core::entities::screen_records;
use chanlog_core::traits::MessageFilter;
use chanlog_core::value_objects::ChannelId;
use chanlog_core::{build_chains, group_by_channel, sort_messages, ChainForest, MessageSortMode};

use crate::dto::{
    ChainBody, ChannelGroupBody, FlatChannelGroupBody, MessageBody, MessagesQuery, OutputDocument,
    ReactionChangesQuery,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::reaction::ReactionService;
use super::render::{render_text, OutputFormat};

/// Document assembly service
pub struct AssemblerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AssemblerService<'a> {
    /// Create a new AssemblerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assemble the output document for a messages query
    #[instrument(skip(self, query))]
    pub async fn assemble(&self, query: &MessagesQuery) -> ServiceResult<OutputDocument> {
        self.assemble_within(query, None).await
    }

    /// Assemble a document restricted to a channel set
    ///
    /// The scope further narrows whatever `query.channel_id` selects; it is
    /// how forwarding confines a channel-less query to the selected dialogs.
    #[instrument(skip(self, query, scope))]
    pub async fn assemble_within(
        &self,
        query: &MessagesQuery,
        scope: Option<&[ChannelId]>,
    ) -> ServiceResult<OutputDocument> {
        let format = match &query.format {
            Some(s) => s.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        // The reaction report is its own pipeline over snapshot history
        if format == OutputFormat::JsonReactions {
            let channel_id = query.channel_id.or_else(|| match scope {
                Some([only]) => Some(only.into_inner()),
                _ => None,
            });
            let reaction_query = ReactionChangesQuery {
                window_hours: None,
                channel_id,
            };
            return ReactionService::new(self.ctx).changes_document(&reaction_query).await;
        }

        let sort_mode = self.resolve_sort_mode(query)?;
        let working_set = self.load_working_set(query, scope, sort_mode).await?;

        if format == OutputFormat::JsonNoChains {
            return Ok(flat_document(working_set));
        }

        let forests = build_forests(working_set, sort_mode);

        match format {
            OutputFormat::Text => Ok(OutputDocument::Text(render_text(&forests))),
            _ => Ok(structured_document(forests)),
        }
    }

    fn resolve_sort_mode(&self, query: &MessagesQuery) -> ServiceResult<MessageSortMode> {
        let raw = query
            .sort
            .as_deref()
            .unwrap_or(&self.ctx.config().display.message_sort);
        Ok(raw.parse::<MessageSortMode>()?)
    }

    /// Fetch, screen, and sort the working set for a query
    async fn load_working_set(
        &self,
        query: &MessagesQuery,
        scope: Option<&[ChannelId]>,
        sort_mode: MessageSortMode,
    ) -> ServiceResult<Vec<chanlog_core::MessageRecord>> {
        let filter = MessageFilter {
            channel_id: query.channel_id.map(ChannelId::new),
            date_from: query.from,
            date_to: query.to,
            limit: query.limit,
        };

        let rows = self.ctx.message_repo().list(&filter).await?;
        let (mut kept, rejected) = screen_records(rows);
        if !rejected.is_empty() {
            warn!(skipped = rejected.len(), "dropped malformed records from working set");
        }

        if let Some(scope) = scope {
            kept.retain(|m| scope.contains(&m.channel_id));
        }

        sort_messages(&mut kept, sort_mode);
        Ok(kept)
    }
}

/// Partition a working set by channel and build a chain forest per channel
///
/// When the sort mode re-orders messages, reply lists inside each chain are
/// re-sorted the same way; the root stays pinned in front regardless.
fn build_forests(
    working_set: Vec<chanlog_core::MessageRecord>,
    sort_mode: MessageSortMode,
) -> Vec<(ChannelId, ChainForest)> {
    group_by_channel(working_set)
        .into_iter()
        .map(|(channel_id, messages)| {
            let mut forest = build_chains(messages);
            if sort_mode != MessageSortMode::Telegram {
                for chain in &mut forest.chains {
                    sort_messages(&mut chain.replies, sort_mode);
                }
            }
            (channel_id, forest)
        })
        .collect()
}

/// Shape a working set into the flat document
///
/// The channel wrapper rule matches the chain-grouped shape: one channel
/// (or none) yields a bare message list, several get the `channels` wrapper.
fn flat_document(working_set: Vec<chanlog_core::MessageRecord>) -> OutputDocument {
    let mut groups = group_by_channel(working_set);
    if groups.len() > 1 {
        let channels = groups
            .into_iter()
            .map(|(channel_id, messages)| FlatChannelGroupBody {
                channel_id: channel_id.into_inner(),
                messages: messages.iter().map(MessageBody::from).collect(),
            })
            .collect();
        return OutputDocument::FlatChannels { channels };
    }

    let messages = groups.pop().map(|(_, m)| m).unwrap_or_default();
    OutputDocument::Flat {
        messages: messages.iter().map(MessageBody::from).collect(),
    }
}

/// Shape forests into the structured document
///
/// One channel (or none) produces the bare shape; the `channels` wrapper
/// appears only for multi-channel working sets.
fn structured_document(mut forests: Vec<(ChannelId, ChainForest)>) -> OutputDocument {
    if forests.len() > 1 {
        let channels = forests
            .into_iter()
            .map(|(channel_id, forest)| ChannelGroupBody {
                channel_id: channel_id.into_inner(),
                standalone_messages: forest.standalone.iter().map(MessageBody::from).collect(),
                chains: forest.chains.iter().map(ChainBody::from).collect(),
            })
            .collect();
        return OutputDocument::Channels { channels };
    }

    let forest = forests.pop().map(|(_, f)| f).unwrap_or_default();
    OutputDocument::Single {
        standalone_messages: forest.standalone.iter().map(MessageBody::from).collect(),
        chains: forest.chains.iter().map(ChainBody::from).collect(),
    }
}
