//! Test fixtures and data generators
//!
//! Provides reusable archive records and the wire shapes integration tests
//! deserialize API responses into.

use std::sync::atomic::{AtomicU64, Ordering};

use chanlog_core::{ChannelId, DialogDescriptor, DialogKind, MessageId, MessageRecord, Sender};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Deserialize;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Fixed reference date all fixture timestamps are offset from
pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Builder for archive message records
pub struct MessageFixture {
    record: MessageRecord,
}

/// Start building a message in a channel, dated at `base_date`
pub fn message(id: i64, channel_id: i64) -> MessageFixture {
    MessageFixture {
        record: MessageRecord::new(
            MessageId::new(id),
            ChannelId::new(channel_id),
            format!("message {id}"),
            base_date(),
        ),
    }
}

impl MessageFixture {
    pub fn content(mut self, content: &str) -> Self {
        self.record.content = content.to_string();
        self
    }

    pub fn reply_to(mut self, parent_id: i64) -> Self {
        self.record.reply_to_id = Some(MessageId::new(parent_id));
        self
    }

    pub fn reactions(mut self, count: i64) -> Self {
        self.record.reactions_count = count;
        self
    }

    pub fn sender(mut self, id: i64, username: &str) -> Self {
        self.record.sender = Some(Sender {
            id,
            first_name: None,
            last_name: None,
            username: Some(username.to_string()),
        });
        self
    }

    /// Shift the message date relative to `base_date`
    pub fn at_minutes(mut self, minutes: i64) -> Self {
        self.record.date = base_date() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> MessageRecord {
        self.record
    }
}

/// Dialog descriptor fixture
pub fn dialog(id: i64, name: &str, kind: DialogKind, selected: bool) -> DialogDescriptor {
    let mut d = DialogDescriptor::new(ChannelId::new(id), name.to_string(), kind);
    d.is_selected = selected;
    d
}

// ============================================================================
// Wire shapes
// ============================================================================

/// Message as it appears in API responses
#[derive(Debug, Deserialize)]
pub struct MessageJson {
    pub id: i64,
    pub channel_id: i64,
    pub content: String,
    pub reactions_count: i64,
    pub reply_to_msg_id: Option<i64>,
}

/// Reply chain in API responses
#[derive(Debug, Deserialize)]
pub struct ChainJson {
    pub root: MessageJson,
    pub replies: Vec<MessageJson>,
}

/// Single-channel document shape
#[derive(Debug, Deserialize)]
pub struct SingleDocumentJson {
    pub standalone_messages: Vec<MessageJson>,
    pub chains: Vec<ChainJson>,
}

/// One channel's share of a multi-channel document
#[derive(Debug, Deserialize)]
pub struct ChannelGroupJson {
    pub channel_id: i64,
    pub standalone_messages: Vec<MessageJson>,
    pub chains: Vec<ChainJson>,
}

/// Multi-channel document shape
#[derive(Debug, Deserialize)]
pub struct ChannelsDocumentJson {
    pub channels: Vec<ChannelGroupJson>,
}

/// Flat document shape (no chain reconstruction)
#[derive(Debug, Deserialize)]
pub struct FlatDocumentJson {
    pub messages: Vec<MessageJson>,
}

/// One channel's share of a multi-channel flat document
#[derive(Debug, Deserialize)]
pub struct FlatChannelGroupJson {
    pub channel_id: i64,
    pub messages: Vec<MessageJson>,
}

/// Multi-channel flat document shape
#[derive(Debug, Deserialize)]
pub struct FlatChannelsDocumentJson {
    pub channels: Vec<FlatChannelGroupJson>,
}

/// Reaction movement entry
#[derive(Debug, Deserialize)]
pub struct ReactionChangeJson {
    pub id: i64,
    pub channel_id: i64,
    pub reactions: ReactionDeltaJson,
}

#[derive(Debug, Deserialize)]
pub struct ReactionDeltaJson {
    pub old: i64,
    pub new: i64,
    pub change: i64,
}

/// Reaction report shape
#[derive(Debug, Deserialize)]
pub struct ReactionsDocumentJson {
    pub period_hours: u32,
    pub messages: Vec<ReactionChangeJson>,
}

/// Dialog as it appears in API responses
#[derive(Debug, Deserialize)]
pub struct DialogJson {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_selected: bool,
}

/// Statistics response
#[derive(Debug, Deserialize)]
pub struct StatsJson {
    pub archive: ArchiveStatsJson,
    pub chains: ChainStatsJson,
}

#[derive(Debug, Deserialize)]
pub struct ArchiveStatsJson {
    pub message_count: i64,
    pub channel_count: i64,
    pub sender_count: i64,
    pub reply_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChainStatsJson {
    pub chain_count: usize,
    pub max_depth: usize,
    pub average_depth: f64,
    pub total_messages_in_chains: usize,
}

/// Forward receipt
#[derive(Debug, Deserialize)]
pub struct ForwardReceiptJson {
    pub destination: String,
    pub status: u16,
}

/// Health probe body
#[derive(Debug, Deserialize)]
pub struct HealthJson {
    pub status: String,
    pub version: String,
}

/// Readiness probe body
#[derive(Debug, Deserialize)]
pub struct ReadinessJson {
    pub ready: bool,
    pub database: bool,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
