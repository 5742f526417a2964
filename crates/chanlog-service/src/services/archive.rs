//! Archive ingestion and statistics

use std::collections::HashSet;

use tracing::{info, instrument, warn};

use chanlog_core::entities::{screen_records, MessageRecord};
use chanlog_core::traits::{ArchiveStats, MessageFilter};
use chanlog_core::value_objects::ChannelId;
use chanlog_core::{build_chains, group_by_channel, Chain, ChainStats};

use crate::dto::StatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Outcome of one ingestion batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub stored: usize,
    pub skipped: usize,
}

/// Archive ingestion and statistics service
pub struct ArchiveService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArchiveService<'a> {
    /// Create a new ArchiveService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a batch of fetched messages and snapshot their reaction counts
    ///
    /// Malformed records are skipped and counted; they never abort the batch.
    #[instrument(skip(self, batch), fields(batch_size = batch.len()))]
    pub async fn ingest(&self, batch: Vec<MessageRecord>) -> ServiceResult<IngestReport> {
        let (kept, rejected) = screen_records(batch);
        if !rejected.is_empty() {
            warn!(skipped = rejected.len(), "skipped malformed records during ingest");
        }

        let mut report = IngestReport {
            stored: 0,
            skipped: rejected.len(),
        };

        for message in &kept {
            self.ctx.message_repo().upsert(message).await?;
            self.ctx
                .reaction_repo()
                .record(message.id, message.channel_id, message.reactions_count)
                .await?;
            report.stored += 1;
        }

        info!(stored = report.stored, skipped = report.skipped, "ingest batch complete");
        Ok(report)
    }

    /// Aggregate archive counters plus chain statistics
    ///
    /// Without a channel the counters come straight from the store; scoped
    /// to one channel they are recomputed over that channel's rows.
    #[instrument(skip(self))]
    pub async fn stats(&self, channel_id: Option<ChannelId>) -> ServiceResult<StatsResponse> {
        let filter = MessageFilter {
            channel_id,
            ..MessageFilter::default()
        };
        let rows = self.ctx.message_repo().list(&filter).await?;
        let (kept, _) = screen_records(rows);

        let archive = match channel_id {
            None => self.ctx.message_repo().statistics().await?,
            Some(_) => count_rows(&kept),
        };

        // Chains never span channels, so build per channel and pool the chains
        let chains: Vec<Chain> = group_by_channel(kept)
            .into_iter()
            .flat_map(|(_, messages)| build_chains(messages).chains)
            .collect();

        Ok(StatsResponse {
            archive: archive.into(),
            chains: ChainStats::from_chains(&chains).into(),
        })
    }
}

/// Archive counters over an in-memory row set
fn count_rows(rows: &[MessageRecord]) -> ArchiveStats {
    let channels: HashSet<_> = rows.iter().map(|m| m.channel_id).collect();
    let senders: HashSet<_> = rows
        .iter()
        .filter_map(|m| m.sender.as_ref().map(|s| s.id))
        .collect();

    ArchiveStats {
        message_count: rows.len() as i64,
        channel_count: channels.len() as i64,
        sender_count: senders.len() as i64,
        reply_count: rows.iter().filter(|m| m.is_reply()).count() as i64,
    }
}
