//! Member role definitions.

use serde::{Deserialize, Serialize};

/// Role of a member within a workspace.
///
/// Presence treats every role alike; the column is carried so rows decode
/// against the shared `members` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Workspace administrator.
    Admin,
    /// Regular member.
    Member,
}
