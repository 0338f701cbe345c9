//! Presence tracker: heartbeat-driven liveness for workspace members.
//!
//! The tracker owns no timers. Clients call [`PresenceService::heartbeat`]
//! on their own cadence and every read compares `last_seen` against the
//! clock, so a crashed client simply reads as offline once the threshold
//! has elapsed.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use teamchat_core::clock::Clock;
use teamchat_core::config::PresenceConfig;
use teamchat_core::error::AppError;
use teamchat_database::store::{MembershipDirectory, PresenceStore};
use teamchat_entity::member::Member;
use teamchat_entity::presence::NewPresenceRecord;

use super::liveness::is_online;
use crate::context::CallerContext;

/// Success marker returned by [`PresenceService::heartbeat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heartbeat {
    /// The member whose presence was recorded.
    pub member_id: Uuid,
    /// Workspace the heartbeat was scoped to.
    pub workspace_id: Uuid,
    /// Recorded heartbeat time in milliseconds since the Unix epoch.
    pub last_seen: i64,
}

/// Presence tracking service.
#[derive(Debug, Clone)]
pub struct PresenceService {
    /// Presence record store.
    store: Arc<dyn PresenceStore>,
    /// Membership lookups.
    directory: Arc<dyn MembershipDirectory>,
    /// Source of "now".
    clock: Arc<dyn Clock>,
    /// Staleness threshold in milliseconds.
    threshold_ms: i64,
}

impl PresenceService {
    /// Creates a new presence service.
    pub fn new(
        store: Arc<dyn PresenceStore>,
        directory: Arc<dyn MembershipDirectory>,
        clock: Arc<dyn Clock>,
        config: &PresenceConfig,
    ) -> Self {
        Self {
            store,
            directory,
            clock,
            threshold_ms: config.threshold_ms,
        }
    }

    /// Records that the caller is active in `workspace_id`.
    ///
    /// Fails with an authentication error for anonymous callers and a
    /// not-found error when the caller has no membership in the workspace.
    pub async fn heartbeat(
        &self,
        ctx: &CallerContext,
        workspace_id: Uuid,
    ) -> Result<Heartbeat, AppError> {
        let user_id = ctx
            .principal()
            .ok_or_else(|| AppError::authentication("Unauthenticated"))?;

        let member = self
            .directory
            .find_membership(workspace_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found in workspace"))?;

        let now = self.clock.now_millis();

        match self.store.find_by_member(workspace_id, member.id).await? {
            Some(record) => {
                let updated = self.store.update_last_seen(record.id, now).await?;
                if !updated {
                    // Cleared between lookup and patch; recreate.
                    self.insert(&member, now).await?;
                }
            }
            None => self.insert(&member, now).await?,
        }

        debug!(
            workspace_id = %workspace_id,
            member_id = %member.id,
            last_seen = now,
            "Heartbeat recorded"
        );

        Ok(Heartbeat {
            member_id: member.id,
            workspace_id,
            last_seen: now,
        })
    }

    /// Removes the caller's presence record in `workspace_id`.
    ///
    /// Never fails: sign-out must not be blocked by presence cleanup, so
    /// anonymous callers, non-members, and store failures all report
    /// success.
    pub async fn clear_presence(&self, ctx: &CallerContext, workspace_id: Uuid) {
        let Some(user_id) = ctx.principal() else {
            debug!(workspace_id = %workspace_id, "Clear presence skipped: unauthenticated");
            return;
        };

        let member = match self.directory.find_membership(workspace_id, user_id).await {
            Ok(Some(member)) => member,
            Ok(None) => {
                debug!(
                    workspace_id = %workspace_id,
                    user_id = %user_id,
                    "Clear presence skipped: not a member"
                );
                return;
            }
            Err(e) => {
                warn!(workspace_id = %workspace_id, error = %e, "Clear presence: membership lookup failed");
                return;
            }
        };

        let record = match self.store.find_by_member(workspace_id, member.id).await {
            Ok(Some(record)) => record,
            Ok(None) => return,
            Err(e) => {
                warn!(member_id = %member.id, error = %e, "Clear presence: lookup failed");
                return;
            }
        };

        match self.store.delete(record.id).await {
            Ok(_) => debug!(
                workspace_id = %workspace_id,
                member_id = %member.id,
                "Presence cleared"
            ),
            Err(e) => warn!(member_id = %member.id, error = %e, "Clear presence: delete failed"),
        }
    }

    /// Online flag for every member of `workspace_id` that has a presence
    /// record. Members without a record are absent and must be treated as
    /// offline.
    ///
    /// Anonymous or non-member callers get an empty map.
    pub async fn online_status(
        &self,
        ctx: &CallerContext,
        workspace_id: Uuid,
    ) -> Result<HashMap<Uuid, bool>, AppError> {
        if self.caller_membership(ctx, workspace_id).await?.is_none() {
            return Ok(HashMap::new());
        }

        let now = self.clock.now_millis();
        let records = self.store.find_by_workspace(workspace_id).await?;

        Ok(records
            .into_iter()
            .map(|r| (r.member_id, is_online(r.last_seen, now, self.threshold_ms)))
            .collect())
    }

    /// Whether `member_id` is online.
    ///
    /// Returns `false` rather than an error for anonymous callers, unknown
    /// members, and callers outside the member's workspace, so membership
    /// existence does not leak.
    pub async fn member_online_status(
        &self,
        ctx: &CallerContext,
        member_id: Uuid,
    ) -> Result<bool, AppError> {
        if ctx.principal().is_none() {
            return Ok(false);
        }

        let Some(target) = self.directory.find_member(member_id).await? else {
            return Ok(false);
        };

        if self
            .caller_membership(ctx, target.workspace_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        let now = self.clock.now_millis();
        Ok(self
            .store
            .find_by_member(target.workspace_id, target.id)
            .await?
            .is_some_and(|r| is_online(r.last_seen, now, self.threshold_ms)))
    }

    async fn caller_membership(
        &self,
        ctx: &CallerContext,
        workspace_id: Uuid,
    ) -> Result<Option<Member>, AppError> {
        match ctx.principal() {
            Some(user_id) => self.directory.find_membership(workspace_id, user_id).await,
            None => Ok(None),
        }
    }

    async fn insert(&self, member: &Member, now: i64) -> Result<(), AppError> {
        self.store
            .insert(NewPresenceRecord {
                member_id: member.id,
                workspace_id: member.workspace_id,
                last_seen: now,
            })
            .await?;
        Ok(())
    }
}
