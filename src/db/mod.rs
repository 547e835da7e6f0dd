//! Document store boundary.
//!
//! The content store only talks to storage through [`DocumentStore`]: named
//! collections of JSON documents keyed by id, plus a push-style change feed.
//! SQLite is the durable backend; the memory store is the single-process
//! local fallback.

mod memory;
mod sqlite;

pub use memory::MemoryDocumentStore;
pub use sqlite::{init_database, SqliteDocumentStore};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::config::{Config, StorageKind};
use crate::errors::AppError;

/// Buffered change events per subscriber before it is considered lagging.
const FEED_CAPACITY: usize = 1024;

/// A stored document together with its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub body: Value,
}

/// How `write_one` treats an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the whole body
    Replace,
    /// Shallow-merge top-level fields into the existing body
    Merge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Written,
    Deleted,
    /// Events were dropped; the subscriber must reload the collection
    Resync,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub collection: String,
    pub id: Option<String>,
    pub kind: ChangeKind,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn read_one(&self, collection: &str, id: &str) -> Result<Option<Value>, AppError>;

    /// All documents of a collection in insertion order.
    async fn read_all(&self, collection: &str) -> Result<Vec<StoredDocument>, AppError>;

    async fn write_one(
        &self,
        collection: &str,
        id: &str,
        body: Value,
        mode: WriteMode,
    ) -> Result<(), AppError>;

    /// Insert a new document and return the id the store assigned.
    async fn add_one(&self, collection: &str, body: Value) -> Result<String, AppError>;

    /// Returns false when no document had that id.
    async fn delete_one(&self, collection: &str, id: &str) -> Result<bool, AppError>;

    /// Dropping the subscription unsubscribes.
    fn subscribe(&self, collection: &str) -> Subscription;

    fn backend_name(&self) -> &'static str;
}

/// Fan-out of change events shared by every subscriber of one store.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, collection: &str, id: &str, kind: ChangeKind) {
        // No subscribers is not an error.
        let _ = self.sender.send(ChangeEvent {
            collection: collection.to_string(),
            id: Some(id.to_string()),
            kind,
        });
    }

    pub fn subscribe(&self, collection: &str) -> Subscription {
        Subscription {
            collection: collection.to_string(),
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Change events for a single collection.
#[derive(Debug)]
pub struct Subscription {
    collection: String,
    receiver: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Next event for this collection, or `None` once the store is gone.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if event.collection == self.collection => return Some(event),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Subscription to {} lagged by {} events, resyncing",
                        self.collection,
                        skipped
                    );
                    return Some(ChangeEvent {
                        collection: self.collection.clone(),
                        id: None,
                        kind: ChangeKind::Resync,
                    });
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

/// Shallow merge: top-level fields of `patch` overwrite those of `existing`.
pub fn merge_documents(existing: Value, patch: Value) -> Value {
    match (existing, patch) {
        (Value::Object(mut base), Value::Object(fields)) => {
            for (key, value) in fields {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (_, patch) => patch,
    }
}

/// Open the document store selected by the configuration.
pub async fn open_store(config: &Config) -> Result<Arc<dyn DocumentStore>, AppError> {
    match config.storage {
        StorageKind::Sqlite => {
            let pool = init_database(&config.db_path).await?;
            Ok(Arc::new(SqliteDocumentStore::new(pool)))
        }
        StorageKind::Memory => match &config.local_path {
            Some(path) => Ok(Arc::new(MemoryDocumentStore::open(path).await?)),
            None => Ok(Arc::new(MemoryDocumentStore::new())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_documents_overwrites_top_level() {
        let merged = merge_documents(
            json!({"title": "A", "description": "keep", "nested": {"a": 1}}),
            json!({"title": "B", "nested": {"b": 2}}),
        );
        assert_eq!(
            merged,
            json!({"title": "B", "description": "keep", "nested": {"b": 2}})
        );
    }

    #[test]
    fn test_merge_into_non_object_replaces() {
        assert_eq!(merge_documents(Value::Null, json!({"a": 1})), json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_subscription_filters_by_collection() {
        let feed = ChangeFeed::new();
        let mut sub = feed.subscribe("podcasts");

        feed.publish("events", "1", ChangeKind::Written);
        feed.publish("podcasts", "7", ChangeKind::Deleted);

        let event = sub.recv().await.unwrap();
        assert_eq!(event.collection, "podcasts");
        assert_eq!(event.id.as_deref(), Some("7"));
        assert_eq!(event.kind, ChangeKind::Deleted);
    }

    #[tokio::test]
    async fn test_subscription_ends_when_feed_dropped() {
        let feed = ChangeFeed::new();
        let mut sub = feed.subscribe("events");
        drop(feed);
        assert!(sub.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_lagging_subscriber_gets_resync() {
        let feed = ChangeFeed::new();
        let mut events = feed.subscribe("events");

        for n in 0..FEED_CAPACITY + 10 {
            feed.publish("events", &n.to_string(), ChangeKind::Written);
        }

        let resync = events.recv().await.unwrap();
        assert_eq!(resync.kind, ChangeKind::Resync);
        assert_eq!(resync.id, None);
        assert_eq!(resync.collection, "events");

        // Delivery resumes with the oldest event still buffered.
        let next = events.recv().await.unwrap();
        assert_eq!(next.kind, ChangeKind::Written);
        assert_eq!(next.id.as_deref(), Some("10"));
    }
}
