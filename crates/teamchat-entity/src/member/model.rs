//! Workspace member model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::MemberRole;

/// A user's membership in one workspace.
///
/// Owned by the membership directory; the presence service only reads it
/// to resolve a caller's member identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Member identifier (distinct per workspace).
    pub id: Uuid,
    /// The workspace this membership belongs to.
    pub workspace_id: Uuid,
    /// The authenticated principal behind this membership.
    pub user_id: Uuid,
    /// Role within the workspace.
    pub role: MemberRole,
    /// When the user joined the workspace.
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Build a plain member joining now.
    pub fn new(workspace_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            user_id,
            role: MemberRole::Member,
            created_at: Utc::now(),
        }
    }
}
