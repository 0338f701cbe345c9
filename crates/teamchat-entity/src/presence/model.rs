//! Presence record model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Last heartbeat of a member in a workspace.
///
/// At most one record exists per `(workspace_id, member_id)`. Online or
/// offline is never stored; it is derived from `last_seen` at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PresenceRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The member this record belongs to.
    pub member_id: Uuid,
    /// The workspace the member belongs to.
    pub workspace_id: Uuid,
    /// Milliseconds since the Unix epoch of the most recent heartbeat.
    pub last_seen: i64,
}

/// Data required to create a presence record on first heartbeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPresenceRecord {
    /// The member sending the heartbeat.
    pub member_id: Uuid,
    /// The workspace the heartbeat is scoped to.
    pub workspace_id: Uuid,
    /// Heartbeat time in milliseconds since the Unix epoch.
    pub last_seen: i64,
}

impl NewPresenceRecord {
    /// Materialize the record with a freshly generated id.
    pub fn into_record(self) -> PresenceRecord {
        PresenceRecord {
            id: Uuid::now_v7(),
            member_id: self.member_id,
            workspace_id: self.workspace_id,
            last_seen: self.last_seen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_keeps_key_and_timestamp() {
        let new = NewPresenceRecord {
            member_id: Uuid::new_v4(),
            workspace_id: Uuid::new_v4(),
            last_seen: 1_700_000_000_000,
        };

        let record = new.clone().into_record();
        assert_eq!(record.member_id, new.member_id);
        assert_eq!(record.workspace_id, new.workspace_id);
        assert_eq!(record.last_seen, new.last_seen);
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let record = PresenceRecord {
            id: Uuid::nil(),
            member_id: Uuid::nil(),
            workspace_id: Uuid::nil(),
            last_seen: 5,
        };
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["last_seen"], 5);
        assert!(json.get("workspace_id").is_some());
    }
}
