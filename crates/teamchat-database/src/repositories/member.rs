//! Workspace member repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use teamchat_core::error::{AppError, ErrorKind};
use teamchat_core::result::AppResult;
use teamchat_entity::member::Member;

use crate::store::MembershipDirectory;

/// Read access to the `members` table.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipDirectory for MemberRepository {
    async fn find_membership(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT id, workspace_id, user_id, role, created_at FROM members \
             WHERE workspace_id = $1 AND user_id = $2",
        )
        .bind(workspace_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find membership", e))
    }

    async fn find_member(&self, member_id: Uuid) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT id, workspace_id, user_id, role, created_at FROM members WHERE id = $1",
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find member", e))
    }
}
