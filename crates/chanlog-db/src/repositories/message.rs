//! SQLite implementation of MessageRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use chanlog_core::entities::MessageRecord;
use chanlog_core::traits::{ArchiveStats, MessageFilter, MessageRepository, RepoResult};
use chanlog_core::value_objects::{ChannelId, MessageId};

use crate::mappers::MessageInsert;
use crate::models::{ArchiveStatsModel, MessageModel};

use super::error::{map_db_error, message_not_found};

const SELECT_MESSAGE: &str = r"
    SELECT m.telegram_id, m.channel_id, m.sender_id,
           s.first_name, s.last_name, s.username,
           m.content, m.date, m.reply_to_msg_id, m.reactions_count, m.raw_data
    FROM messages m
    LEFT JOIN senders s ON s.id = m.sender_id
";

/// SQLite implementation of MessageRepository
#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    /// Create a new SqliteMessageRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id, channel_id = %message.channel_id))]
    async fn upsert(&self, message: &MessageRecord) -> RepoResult<()> {
        let insert = MessageInsert::new(message);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if let Some(sender) = &message.sender {
            sqlx::query(
                r"
                INSERT INTO senders (id, first_name, last_name, username)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT (id) DO UPDATE SET
                    first_name = excluded.first_name,
                    last_name = excluded.last_name,
                    username = excluded.username
                ",
            )
            .bind(sender.id)
            .bind(&sender.first_name)
            .bind(&sender.last_name)
            .bind(&sender.username)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        sqlx::query(
            r"
            INSERT INTO messages
                (telegram_id, channel_id, sender_id, content, date,
                 reply_to_msg_id, reactions_count, raw_data)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT (telegram_id, channel_id) DO UPDATE SET
                sender_id = excluded.sender_id,
                content = excluded.content,
                date = excluded.date,
                reply_to_msg_id = excluded.reply_to_msg_id,
                reactions_count = excluded.reactions_count,
                raw_data = excluded.raw_data
            ",
        )
        .bind(insert.telegram_id)
        .bind(insert.channel_id)
        .bind(insert.sender_id)
        .bind(insert.content)
        .bind(message.date)
        .bind(insert.reply_to_msg_id)
        .bind(insert.reactions_count)
        .bind(insert.raw_data)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, id: MessageId, channel_id: ChannelId) -> RepoResult<Option<MessageRecord>> {
        let query = format!("{SELECT_MESSAGE} WHERE m.telegram_id = ?1 AND m.channel_id = ?2");

        let result = sqlx::query_as::<_, MessageModel>(&query)
            .bind(id.into_inner())
            .bind(channel_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(MessageRecord::from))
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &MessageFilter) -> RepoResult<Vec<MessageRecord>> {
        // LIMIT -1 means "no limit" in SQLite
        let limit = filter.limit.map_or(-1_i64, i64::from);

        let query = format!(
            r"{SELECT_MESSAGE}
            WHERE (?1 IS NULL OR m.channel_id = ?1)
              AND (?2 IS NULL OR m.date >= ?2)
              AND (?3 IS NULL OR m.date <= ?3)
            ORDER BY m.date, m.telegram_id
            LIMIT ?4
            "
        );

        let results = sqlx::query_as::<_, MessageModel>(&query)
            .bind(filter.channel_id.map(ChannelId::into_inner))
            .bind(filter.date_from)
            .bind(filter.date_to)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(MessageRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MessageId, channel_id: ChannelId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM messages WHERE telegram_id = ?1 AND channel_id = ?2
            ",
        )
        .bind(id.into_inner())
        .bind(channel_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn statistics(&self) -> RepoResult<ArchiveStats> {
        let model = sqlx::query_as::<_, ArchiveStatsModel>(
            r"
            SELECT COUNT(*) AS message_count,
                   COUNT(DISTINCT channel_id) AS channel_count,
                   COUNT(DISTINCT sender_id) AS sender_count,
                   COUNT(reply_to_msg_id) AS reply_count
            FROM messages
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ArchiveStats {
            message_count: model.message_count,
            channel_count: model.channel_count,
            sender_count: model.sender_count,
            reply_count: model.reply_count,
        })
    }
}
