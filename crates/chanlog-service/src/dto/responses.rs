//! Response DTOs
//!
//! Wire shapes for assembled documents. Field names are part of the output
//! contract consumed by downstream tooling; change them deliberately.

use chanlog_core::entities::{DialogDescriptor, MessageRecord, Sender};
use chanlog_core::{ArchiveStats, Chain, ChainStats};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Sender as rendered on the wire
#[derive(Debug, Clone, Serialize)]
pub struct SenderBody {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl From<&Sender> for SenderBody {
    fn from(sender: &Sender) -> Self {
        Self {
            id: sender.id,
            first_name: sender.first_name.clone(),
            last_name: sender.last_name.clone(),
            username: sender.username.clone(),
        }
    }
}

/// Message as rendered on the wire
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub id: i64,
    pub channel_id: i64,
    pub date: DateTime<Utc>,
    pub content: String,
    pub reactions_count: i64,
    pub reply_to_msg_id: Option<i64>,
    pub sender: Option<SenderBody>,
}

impl From<&MessageRecord> for MessageBody {
    fn from(message: &MessageRecord) -> Self {
        Self {
            id: message.id.into_inner(),
            channel_id: message.channel_id.into_inner(),
            date: message.date,
            content: message.content.clone(),
            reactions_count: message.reactions_count,
            reply_to_msg_id: message.reply_to_id.map(chanlog_core::MessageId::into_inner),
            sender: message.sender.as_ref().map(SenderBody::from),
        }
    }
}

/// Old/new reaction counts and their difference
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionDelta {
    pub old: i64,
    pub new: i64,
    pub change: i64,
}

/// Message annotated with its reaction movement
#[derive(Debug, Clone, Serialize)]
pub struct ReactionChangeBody {
    #[serde(flatten)]
    pub message: MessageBody,
    pub reactions: ReactionDelta,
}

/// Reply chain as rendered on the wire
#[derive(Debug, Clone, Serialize)]
pub struct ChainBody {
    pub root: MessageBody,
    pub replies: Vec<MessageBody>,
}

impl From<&Chain> for ChainBody {
    fn from(chain: &Chain) -> Self {
        Self {
            root: MessageBody::from(&chain.root),
            replies: chain.replies.iter().map(MessageBody::from).collect(),
        }
    }
}

/// One channel's share of a multi-channel document
#[derive(Debug, Clone, Serialize)]
pub struct ChannelGroupBody {
    pub channel_id: i64,
    pub standalone_messages: Vec<MessageBody>,
    pub chains: Vec<ChainBody>,
}

/// One channel's share of a multi-channel flat document
#[derive(Debug, Clone, Serialize)]
pub struct FlatChannelGroupBody {
    pub channel_id: i64,
    pub messages: Vec<MessageBody>,
}

/// Assembled output document
///
/// Untagged: each variant serializes as its own object shape. The `channels`
/// wrapper appears only when the working set spans more than one channel;
/// the same rule applies to the flat and chain-grouped encodings.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OutputDocument {
    Text(String),
    Flat {
        messages: Vec<MessageBody>,
    },
    FlatChannels {
        channels: Vec<FlatChannelGroupBody>,
    },
    Single {
        standalone_messages: Vec<MessageBody>,
        chains: Vec<ChainBody>,
    },
    Channels {
        channels: Vec<ChannelGroupBody>,
    },
    Reactions {
        period_hours: u32,
        messages: Vec<ReactionChangeBody>,
    },
}

/// Dialog as rendered on the wire
#[derive(Debug, Clone, Serialize)]
pub struct DialogBody {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub is_selected: bool,
}

impl From<&DialogDescriptor> for DialogBody {
    fn from(dialog: &DialogDescriptor) -> Self {
        Self {
            id: dialog.id.into_inner(),
            name: dialog.name.clone(),
            kind: dialog.kind.label(),
            is_selected: dialog.is_selected,
        }
    }
}

/// Aggregate archive counters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArchiveStatsBody {
    pub message_count: i64,
    pub channel_count: i64,
    pub sender_count: i64,
    pub reply_count: i64,
}

impl From<ArchiveStats> for ArchiveStatsBody {
    fn from(stats: ArchiveStats) -> Self {
        Self {
            message_count: stats.message_count,
            channel_count: stats.channel_count,
            sender_count: stats.sender_count,
            reply_count: stats.reply_count,
        }
    }
}

/// Aggregate chain statistics
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChainStatsBody {
    pub chain_count: usize,
    pub max_depth: usize,
    pub average_depth: f64,
    pub total_messages_in_chains: usize,
}

impl From<ChainStats> for ChainStatsBody {
    fn from(stats: ChainStats) -> Self {
        Self {
            chain_count: stats.chain_count,
            max_depth: stats.max_depth,
            average_depth: stats.average_depth,
            total_messages_in_chains: stats.total_messages_in_chains,
        }
    }
}

/// Combined statistics response
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResponse {
    pub archive: ArchiveStatsBody,
    pub chains: ChainStatsBody,
}

/// Result of forwarding a document to an external destination
#[derive(Debug, Clone, Serialize)]
pub struct ForwardReceipt {
    pub destination: String,
    pub status: u16,
}

/// Liveness probe body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    /// The process is up
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness probe body with dependency health
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

impl ReadinessResponse {
    /// Readiness derived from dependency health
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            ready: database,
            database,
        }
    }
}
