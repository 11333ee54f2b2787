//! In-memory tag store for tests and local runs.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::TagStore;
use crate::tag::{NewTag, ProgrammedTag};

/// Tag store keeping records in process memory.
///
/// Backs local development runs and route tests; contents are lost on
/// shutdown. Ids and timestamps are assigned here the way the database
/// would assign them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tags: RwLock<Vec<ProgrammedTag>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagStore for MemoryStore {
    async fn insert(&self, tag: NewTag) -> Result<ProgrammedTag> {
        let record = ProgrammedTag {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            tag_uid: tag.tag_uid,
            tag_type: tag.tag_type,
            redirect_url: tag.redirect_url,
            access_rights: tag.access_rights,
            derivation_key: tag.derivation_key,
            tt_status_mirroring: tag.tt_status_mirroring,
            notes: tag.notes,
            created_at: Utc::now(),
        };

        self.tags.write().await.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ProgrammedTag>> {
        let mut tags = self.tags.read().await.clone();
        // created_at descending, id breaking ties for same-instant inserts
        tags.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagType;

    fn new_tag(uid: &str) -> NewTag {
        NewTag {
            tag_uid: uid.to_string(),
            tag_type: TagType::Dna,
            redirect_url: None,
            access_rights: "0F".to_string(),
            derivation_key: "0F".to_string(),
            tt_status_mirroring: false,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_timestamps() {
        let store = MemoryStore::new();

        let first = store.insert(new_tag("04A5B6C7D8E9F0")).await.unwrap();
        let second = store.insert(new_tag("04A5B6C7D8E9F1")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let store = MemoryStore::new();
        store.insert(new_tag("04A5B6C7D8E9F0")).await.unwrap();
        store.insert(new_tag("04A5B6C7D8E9F1")).await.unwrap();
        store.insert(new_tag("04A5B6C7D8E9F2")).await.unwrap();

        let tags = store.list().await.unwrap();
        let uids: Vec<_> = tags.iter().map(|t| t.tag_uid.as_str()).collect();
        assert_eq!(
            uids,
            vec!["04A5B6C7D8E9F2", "04A5B6C7D8E9F1", "04A5B6C7D8E9F0"]
        );
    }

    #[tokio::test]
    async fn test_list_on_empty_store() {
        let store = MemoryStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }
}
