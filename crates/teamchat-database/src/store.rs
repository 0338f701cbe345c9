//! Storage contracts consumed by the presence service.
//!
//! Both traits have a PostgreSQL implementation in
//! [`crate::repositories`] and an in-memory one in [`crate::memory`].

use async_trait::async_trait;
use uuid::Uuid;

use teamchat_core::result::AppResult;
use teamchat_entity::member::Member;
use teamchat_entity::presence::{NewPresenceRecord, PresenceRecord};

/// Keyed store of presence records.
///
/// Implementations must keep at most one record per
/// `(workspace_id, member_id)`.
#[async_trait]
pub trait PresenceStore: Send + Sync + std::fmt::Debug + 'static {
    /// Unique lookup by the composite key.
    async fn find_by_member(
        &self,
        workspace_id: Uuid,
        member_id: Uuid,
    ) -> AppResult<Option<PresenceRecord>>;

    /// Collect every record scoped to a workspace.
    async fn find_by_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<PresenceRecord>>;

    /// Insert a record. If a record with the same composite key appeared
    /// concurrently, its `last_seen` is overwritten instead.
    async fn insert(&self, record: NewPresenceRecord) -> AppResult<PresenceRecord>;

    /// Overwrite `last_seen` of the record with the given id.
    ///
    /// Returns `false` if the record no longer exists.
    async fn update_last_seen(&self, id: Uuid, last_seen: i64) -> AppResult<bool>;

    /// Delete a record by id. Returns `true` if a record was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Read-only view of workspace memberships.
#[async_trait]
pub trait MembershipDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Find the membership of `user_id` in `workspace_id`.
    async fn find_membership(&self, workspace_id: Uuid, user_id: Uuid)
    -> AppResult<Option<Member>>;

    /// Find a membership by its member id.
    async fn find_member(&self, member_id: Uuid) -> AppResult<Option<Member>>;
}
