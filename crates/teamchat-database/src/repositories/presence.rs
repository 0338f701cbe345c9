//! Presence repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use teamchat_core::error::{AppError, ErrorKind};
use teamchat_core::result::AppResult;
use teamchat_entity::presence::{NewPresenceRecord, PresenceRecord};

use crate::store::PresenceStore;

/// Repository for the `presence` table.
#[derive(Debug, Clone)]
pub struct PresenceRepository {
    pool: PgPool,
}

impl PresenceRepository {
    /// Create a new presence repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PresenceStore for PresenceRepository {
    async fn find_by_member(
        &self,
        workspace_id: Uuid,
        member_id: Uuid,
    ) -> AppResult<Option<PresenceRecord>> {
        sqlx::query_as::<_, PresenceRecord>(
            "SELECT id, member_id, workspace_id, last_seen FROM presence \
             WHERE workspace_id = $1 AND member_id = $2",
        )
        .bind(workspace_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find presence", e))
    }

    async fn find_by_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<PresenceRecord>> {
        sqlx::query_as::<_, PresenceRecord>(
            "SELECT id, member_id, workspace_id, last_seen FROM presence WHERE workspace_id = $1",
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list workspace presence",
                e,
            )
        })
    }

    async fn insert(&self, record: NewPresenceRecord) -> AppResult<PresenceRecord> {
        let record = record.into_record();

        sqlx::query_as::<_, PresenceRecord>(
            "INSERT INTO presence (id, member_id, workspace_id, last_seen) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (workspace_id, member_id) DO UPDATE SET \
                last_seen = EXCLUDED.last_seen \
             RETURNING id, member_id, workspace_id, last_seen",
        )
        .bind(record.id)
        .bind(record.member_id)
        .bind(record.workspace_id)
        .bind(record.last_seen)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert presence", e))
    }

    async fn update_last_seen(&self, id: Uuid, last_seen: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE presence SET last_seen = $2 WHERE id = $1")
            .bind(id)
            .bind(last_seen)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update presence", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM presence WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete presence", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
