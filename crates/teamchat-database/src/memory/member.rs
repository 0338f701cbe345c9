//! In-memory membership directory.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use teamchat_core::result::AppResult;
use teamchat_entity::member::Member;

use crate::store::MembershipDirectory;

/// Memberships keyed by member id.
#[derive(Debug, Default)]
pub struct MemoryMembershipDirectory {
    members: DashMap<Uuid, Member>,
}

impl MemoryMembershipDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a membership.
    pub fn add(&self, member: Member) {
        self.members.insert(member.id, member);
    }

    /// Convenience: add `user_id` to `workspace_id` and return the membership.
    pub fn join(&self, workspace_id: Uuid, user_id: Uuid) -> Member {
        let member = Member::new(workspace_id, user_id);
        self.add(member.clone());
        member
    }
}

#[async_trait]
impl MembershipDirectory for MemoryMembershipDirectory {
    async fn find_membership(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<Member>> {
        Ok(self
            .members
            .iter()
            .find(|m| m.workspace_id == workspace_id && m.user_id == user_id)
            .map(|m| m.value().clone()))
    }

    async fn find_member(&self, member_id: Uuid) -> AppResult<Option<Member>> {
        Ok(self.members.get(&member_id).map(|m| m.value().clone()))
    }
}
