//! Per-call context carrying the (optional) authenticated principal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current call.
///
/// Built by the transport layer and passed into service methods. The
/// principal is optional: each operation decides whether an anonymous
/// caller is an error or a default-valued answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallerContext {
    /// The authenticated user, if any.
    pub user_id: Option<Uuid>,
}

impl CallerContext {
    /// Context for an authenticated user.
    pub fn authenticated(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Context for an unauthenticated caller.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The resolved principal.
    pub fn principal(&self) -> Option<Uuid> {
        self.user_id
    }
}
