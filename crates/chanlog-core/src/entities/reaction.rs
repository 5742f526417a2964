//! Reaction snapshot entity - a timestamped recording of a message's reaction count
//!
//! Snapshot history is append-only: for a given message id, capture timestamps
//! are strictly increasing and existing snapshots are never mutated.

use chrono::{DateTime, Utc};

use crate::value_objects::{ChannelId, MessageId};

/// One captured reaction count for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionSnapshot {
    pub message_id: MessageId,
    /// Message ids are only unique per channel upstream
    pub channel_id: ChannelId,
    pub reactions_count: i64,
    pub checked_at: DateTime<Utc>,
}

impl ReactionSnapshot {
    /// Create a new snapshot
    #[must_use]
    pub fn new(
        message_id: MessageId,
        channel_id: ChannelId,
        reactions_count: i64,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            message_id,
            channel_id,
            reactions_count,
            checked_at,
        }
    }
}
