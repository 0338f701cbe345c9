//! In-memory presence store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use teamchat_core::result::AppResult;
use teamchat_entity::presence::{NewPresenceRecord, PresenceRecord};

use crate::store::PresenceStore;

/// Presence records keyed by `(workspace_id, member_id)`, with a record
/// id index so patch and delete by id stay O(1).
#[derive(Debug, Default)]
pub struct MemoryPresenceStore {
    records: DashMap<(Uuid, Uuid), PresenceRecord>,
    keys: DashMap<Uuid, (Uuid, Uuid)>,
}

impl MemoryPresenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all workspaces.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn key_of(&self, id: Uuid) -> Option<(Uuid, Uuid)> {
        self.keys.get(&id).map(|k| *k.value())
    }
}

#[async_trait]
impl PresenceStore for MemoryPresenceStore {
    async fn find_by_member(
        &self,
        workspace_id: Uuid,
        member_id: Uuid,
    ) -> AppResult<Option<PresenceRecord>> {
        Ok(self
            .records
            .get(&(workspace_id, member_id))
            .map(|r| r.value().clone()))
    }

    async fn find_by_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<PresenceRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.key().0 == workspace_id)
            .map(|r| r.value().clone())
            .collect())
    }

    async fn insert(&self, record: NewPresenceRecord) -> AppResult<PresenceRecord> {
        let key = (record.workspace_id, record.member_id);
        let last_seen = record.last_seen;
        let stored = self
            .records
            .entry(key)
            .and_modify(|existing| existing.last_seen = last_seen)
            .or_insert_with(|| record.into_record())
            .value()
            .clone();
        self.keys.insert(stored.id, key);
        Ok(stored)
    }

    async fn update_last_seen(&self, id: Uuid, last_seen: i64) -> AppResult<bool> {
        let Some(key) = self.key_of(id) else {
            return Ok(false);
        };
        match self.records.get_mut(&key) {
            Some(mut record) if record.id == id => {
                record.last_seen = last_seen;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let Some(key) = self.key_of(id) else {
            return Ok(false);
        };
        let removed = self.records.remove_if(&key, |_, r| r.id == id).is_some();
        self.keys.remove(&id);
        Ok(removed)
    }
}
