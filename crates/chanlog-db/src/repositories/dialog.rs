//! SQLite implementation of DialogRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use chanlog_core::entities::DialogDescriptor;
use chanlog_core::traits::{DialogRepository, RepoResult};
use chanlog_core::value_objects::ChannelId;

use crate::models::DialogModel;

use super::error::{dialog_not_found, map_db_error};

/// SQLite implementation of DialogRepository
#[derive(Clone)]
pub struct SqliteDialogRepository {
    pool: SqlitePool,
}

impl SqliteDialogRepository {
    /// Create a new SqliteDialogRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DialogRepository for SqliteDialogRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<DialogDescriptor>> {
        let results = sqlx::query_as::<_, DialogModel>(
            r"
            SELECT id, name, kind, is_selected
            FROM dialogs
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DialogDescriptor::from).collect())
    }

    #[instrument(skip(self, dialog), fields(dialog_id = %dialog.id))]
    async fn upsert(&self, dialog: &DialogDescriptor) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO dialogs (id, name, kind, is_selected)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                kind = excluded.kind,
                is_selected = excluded.is_selected
            ",
        )
        .bind(dialog.id.into_inner())
        .bind(&dialog.name)
        .bind(dialog.kind.label())
        .bind(dialog.is_selected)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn selected(&self) -> RepoResult<Vec<DialogDescriptor>> {
        let results = sqlx::query_as::<_, DialogModel>(
            r"
            SELECT id, name, kind, is_selected
            FROM dialogs
            WHERE is_selected = 1
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DialogDescriptor::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_selected(&self, id: ChannelId, selected: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE dialogs SET is_selected = ?2 WHERE id = ?1
            ",
        )
        .bind(id.into_inner())
        .bind(selected)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(dialog_not_found(id));
        }
        Ok(())
    }
}
