//! SQLite implementation of ReactionHistoryRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use chanlog_core::entities::ReactionSnapshot;
use chanlog_core::traits::{ReactionHistoryRepository, RepoResult};
use chanlog_core::value_objects::{ChannelId, MessageId};

use crate::models::ReactionHistoryModel;

use super::error::map_db_error;

/// SQLite implementation of ReactionHistoryRepository
#[derive(Clone)]
pub struct SqliteReactionHistoryRepository {
    pool: SqlitePool,
}

impl SqliteReactionHistoryRepository {
    /// Create a new SqliteReactionHistoryRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionHistoryRepository for SqliteReactionHistoryRepository {
    #[instrument(skip(self))]
    async fn record(
        &self,
        message_id: MessageId,
        channel_id: ChannelId,
        reactions_count: i64,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reactions_history (message_id, channel_id, reactions_count, checked_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(message_id.into_inner())
        .bind(channel_id.into_inner())
        .bind(reactions_count)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn history(&self, channel_id: Option<ChannelId>) -> RepoResult<Vec<ReactionSnapshot>> {
        let results = sqlx::query_as::<_, ReactionHistoryModel>(
            r"
            SELECT message_id, channel_id, reactions_count, checked_at
            FROM reactions_history
            WHERE (?1 IS NULL OR channel_id = ?1)
            ORDER BY checked_at
            ",
        )
        .bind(channel_id.map(ChannelId::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReactionSnapshot::from).collect())
    }
}
