//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a messages row joined with its sender
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub telegram_id: i64,
    pub channel_id: i64,
    pub sender_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub content: String,
    pub date: DateTime<Utc>,
    pub reply_to_msg_id: Option<i64>,
    pub reactions_count: i64,
    pub raw_data: Option<String>,
}

impl MessageModel {
    /// Check if message is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.reply_to_msg_id.is_some()
    }
}

/// Aggregate counters row
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ArchiveStatsModel {
    pub message_count: i64,
    pub channel_count: i64,
    pub sender_count: i64,
    pub reply_count: i64,
}
