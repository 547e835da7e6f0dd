//! In-memory document store, the local fallback backend.
//!
//! Single-process only. When opened with a path, the whole store is written
//! to that JSON file after every mutation and loaded back on startup. A
//! mutation only becomes visible once that write has succeeded. Ids are
//! millisecond timestamps, bumped when two adds land in the same millisecond.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{
    merge_documents, ChangeFeed, ChangeKind, DocumentStore, StoredDocument, Subscription,
    WriteMode,
};
use crate::errors::AppError;

type Collections = BTreeMap<String, Vec<StoredDocument>>;

#[derive(Debug)]
pub struct MemoryDocumentStore {
    collections: RwLock<Collections>,
    feed: ChangeFeed,
    path: Option<PathBuf>,
    last_id: AtomicI64,
}

impl MemoryDocumentStore {
    /// A store that forgets everything on restart.
    pub fn new() -> Self {
        Self::with_state(Collections::new(), None)
    }

    /// A store persisted to `path`, loading any existing file.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        let collections = match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::Database(format!("Corrupt local store {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Collections::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Local store opened at {}", path.display());
        Ok(Self::with_state(collections, Some(path.to_path_buf())))
    }

    fn with_state(collections: Collections, path: Option<PathBuf>) -> Self {
        Self {
            collections: RwLock::new(collections),
            feed: ChangeFeed::new(),
            path,
            last_id: AtomicI64::new(0),
        }
    }

    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        now.max(previous + 1).to_string()
    }

    async fn persist(&self, collections: &Collections) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
        let bytes = serde_json::to_vec_pretty(collections)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    /// Persist `next` and only then make it the live state.
    async fn commit(&self, live: &mut Collections, next: Collections) -> Result<(), AppError> {
        self.persist(&next).await?;
        *live = next;
        Ok(())
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn read_one(&self, collection: &str, id: &str) -> Result<Option<Value>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .map(|d| d.body.clone()))
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<StoredDocument>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn write_one(
        &self,
        collection: &str,
        id: &str,
        body: Value,
        mode: WriteMode,
    ) -> Result<(), AppError> {
        let mut collections = self.collections.write().await;
        let mut next = collections.clone();
        let docs = next.entry(collection.to_string()).or_default();

        match docs.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.body = match mode {
                    WriteMode::Replace => body,
                    WriteMode::Merge => merge_documents(doc.body.take(), body),
                };
            }
            None => docs.push(StoredDocument {
                id: id.to_string(),
                body,
            }),
        }

        self.commit(&mut collections, next).await?;
        drop(collections);

        self.feed.publish(collection, id, ChangeKind::Written);
        Ok(())
    }

    async fn add_one(&self, collection: &str, body: Value) -> Result<String, AppError> {
        let id = self.next_id();

        let mut collections = self.collections.write().await;
        let mut next = collections.clone();
        next.entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                body,
            });
        self.commit(&mut collections, next).await?;
        drop(collections);

        self.feed.publish(collection, &id, ChangeKind::Written);
        Ok(id)
    }

    async fn delete_one(&self, collection: &str, id: &str) -> Result<bool, AppError> {
        let mut collections = self.collections.write().await;
        let mut next = collections.clone();
        let Some(docs) = next.get_mut(collection) else {
            return Ok(false);
        };

        let before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() == before {
            return Ok(false);
        }

        self.commit(&mut collections, next).await?;
        drop(collections);

        self.feed.publish(collection, id, ChangeKind::Deleted);
        Ok(true)
    }

    fn subscribe(&self, collection: &str) -> Subscription {
        self.feed.subscribe(collection)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_timestamp_ids_are_unique() {
        let store = MemoryDocumentStore::new();
        let mut ids = Vec::new();
        for n in 0..20 {
            ids.push(store.add_one("events", json!({"n": n})).await.unwrap());
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 20);
        assert!(ids.iter().all(|id| id.parse::<i64>().is_ok()));
    }

    #[tokio::test]
    async fn test_merge_and_replace() {
        let store = MemoryDocumentStore::new();
        store
            .write_one("content", "social", json!({"instagram": "i", "youtube": "y"}), WriteMode::Replace)
            .await
            .unwrap();
        store
            .write_one("content", "social", json!({"youtube": "y2"}), WriteMode::Merge)
            .await
            .unwrap();
        assert_eq!(
            store.read_one("content", "social").await.unwrap().unwrap(),
            json!({"instagram": "i", "youtube": "y2"})
        );

        store
            .write_one("content", "social", json!({"linkedin": "l"}), WriteMode::Replace)
            .await
            .unwrap();
        assert_eq!(
            store.read_one("content", "social").await.unwrap().unwrap(),
            json!({"linkedin": "l"})
        );
    }

    #[tokio::test]
    async fn test_delete_missing_is_false() {
        let store = MemoryDocumentStore::new();
        assert!(!store.delete_one("podcasts", "nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_persists_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local.json");

        let store = MemoryDocumentStore::open(&path).await.unwrap();
        let id = store.add_one("leads", json!({"name": "Meera"})).await.unwrap();
        drop(store);

        let reopened = MemoryDocumentStore::open(&path).await.unwrap();
        let docs = reopened.read_all("leads").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, id);
        assert_eq!(docs[0].body["name"], "Meera");
    }

    #[tokio::test]
    async fn test_failed_persist_leaves_store_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoryDocumentStore::new();
        store.add_one("podcasts", json!({"title": "Kept"})).await.unwrap();
        let before = store.read_all("podcasts").await.unwrap();

        // A directory cannot be written as a file, so every persist fails.
        let broken = MemoryDocumentStore::with_state(
            store.collections.read().await.clone(),
            Some(temp_dir.path().to_path_buf()),
        );
        let mut changes = broken.subscribe("podcasts");

        assert!(broken.add_one("podcasts", json!({"title": "Lost"})).await.is_err());
        let replaced = broken
            .write_one(
                "podcasts",
                &before[0].id,
                json!({"title": "Changed"}),
                WriteMode::Replace,
            )
            .await;
        assert!(replaced.is_err());
        assert!(broken.delete_one("podcasts", &before[0].id).await.is_err());

        assert_eq!(broken.read_all("podcasts").await.unwrap(), before);
        let pending =
            tokio::time::timeout(std::time::Duration::from_millis(50), changes.recv()).await;
        assert!(pending.is_err(), "no change may be published for a failed write");
    }
}
