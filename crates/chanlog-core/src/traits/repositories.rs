//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{DialogDescriptor, MessageRecord, ReactionSnapshot};
use crate::error::DomainError;
use crate::value_objects::{ChannelId, MessageId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Message Repository
// ============================================================================

/// Filter options for message queries
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    /// Restrict to one channel; `None` spans all archived channels
    pub channel_id: Option<ChannelId>,
    /// Inclusive lower bound on message date
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on message date
    pub date_to: Option<DateTime<Utc>>,
    /// Maximum number of rows to return
    pub limit: Option<u32>,
}

/// Aggregate counters over the archive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveStats {
    pub message_count: i64,
    pub channel_count: i64,
    pub sender_count: i64,
    pub reply_count: i64,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert or update a message by its (id, channel) pair
    async fn upsert(&self, message: &MessageRecord) -> RepoResult<()>;

    /// Find one message within a channel
    async fn find(&self, id: MessageId, channel_id: ChannelId) -> RepoResult<Option<MessageRecord>>;

    /// List messages matching the filter, ordered by date then id
    async fn list(&self, filter: &MessageFilter) -> RepoResult<Vec<MessageRecord>>;

    /// Delete one message within a channel
    async fn delete(&self, id: MessageId, channel_id: ChannelId) -> RepoResult<()>;

    /// Aggregate counters over the archive
    async fn statistics(&self) -> RepoResult<ArchiveStats>;
}

// ============================================================================
// Reaction History Repository
// ============================================================================

#[async_trait]
pub trait ReactionHistoryRepository: Send + Sync {
    /// Append one reaction-count snapshot for a message
    async fn record(
        &self,
        message_id: MessageId,
        channel_id: ChannelId,
        reactions_count: i64,
    ) -> RepoResult<()>;

    /// Full snapshot history, optionally restricted to one channel,
    /// ordered by capture time ascending
    async fn history(&self, channel_id: Option<ChannelId>) -> RepoResult<Vec<ReactionSnapshot>>;
}

// ============================================================================
// Dialog Repository
// ============================================================================

#[async_trait]
pub trait DialogRepository: Send + Sync {
    /// All known dialogs
    async fn list(&self) -> RepoResult<Vec<DialogDescriptor>>;

    /// Insert or update a dialog descriptor by id
    async fn upsert(&self, dialog: &DialogDescriptor) -> RepoResult<()>;

    /// Dialogs currently in the selected set
    async fn selected(&self) -> RepoResult<Vec<DialogDescriptor>>;

    /// Mark a dialog as selected or unselected
    async fn set_selected(&self, id: ChannelId, selected: bool) -> RepoResult<()>;
}
