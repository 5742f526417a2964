//! Reaction history database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions_history table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionHistoryModel {
    pub message_id: i64,
    pub channel_id: i64,
    pub reactions_count: i64,
    pub checked_at: DateTime<Utc>,
}
