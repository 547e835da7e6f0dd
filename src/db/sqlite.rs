//! SQLite-backed document store.
//!
//! Every collection lives in one `documents` table keyed by `(collection, id)`.
//! Bodies are stored as JSON text; `position` preserves insertion order.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::{
    merge_documents, ChangeFeed, ChangeKind, DocumentStore, StoredDocument, Subscription,
    WriteMode,
};
use crate::errors::AppError;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            body TEXT NOT NULL,
            position INTEGER NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (collection, id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_documents_position ON documents(collection, position);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Document store over a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    feed: ChangeFeed,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            feed: ChangeFeed::new(),
        }
    }

    async fn upsert(&self, collection: &str, id: &str, body: &Value) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        let body_json = serde_json::to_string(body)?;

        // New rows go to the end; existing rows keep their position.
        sqlx::query(
            r#"INSERT INTO documents (collection, id, body, position, updated_at)
               VALUES (?, ?, ?, (SELECT COALESCE(MAX(position), 0) + 1 FROM documents WHERE collection = ?), ?)
               ON CONFLICT(collection, id) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at"#,
        )
        .bind(collection)
        .bind(id)
        .bind(&body_json)
        .bind(collection)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn read_one(&self, collection: &str, id: &str) -> Result<Option<Value>, AppError> {
        let row = sqlx::query("SELECT body FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| parse_body(row.get("body"))))
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<StoredDocument>, AppError> {
        let rows = sqlx::query(
            "SELECT id, body FROM documents WHERE collection = ? ORDER BY position, id",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| StoredDocument {
                id: row.get("id"),
                body: parse_body(row.get("body")),
            })
            .collect())
    }

    async fn write_one(
        &self,
        collection: &str,
        id: &str,
        body: Value,
        mode: WriteMode,
    ) -> Result<(), AppError> {
        let body = match mode {
            WriteMode::Replace => body,
            WriteMode::Merge => match self.read_one(collection, id).await? {
                Some(existing) => merge_documents(existing, body),
                None => body,
            },
        };

        self.upsert(collection, id, &body).await?;
        self.feed.publish(collection, id, ChangeKind::Written);
        Ok(())
    }

    async fn add_one(&self, collection: &str, body: Value) -> Result<String, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        self.upsert(collection, &id, &body).await?;
        self.feed.publish(collection, &id, ChangeKind::Written);
        Ok(id)
    }

    async fn delete_one(&self, collection: &str, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            self.feed.publish(collection, id, ChangeKind::Deleted);
        }
        Ok(deleted)
    }

    fn subscribe(&self, collection: &str) -> Subscription {
        self.feed.subscribe(collection)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

fn parse_body(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!("Stored document is not valid JSON: {}", e);
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    async fn open_temp() -> (SqliteDocumentStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("test.sqlite"))
            .await
            .unwrap();
        (SqliteDocumentStore::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_add_and_read_all_in_insertion_order() {
        let (store, _dir) = open_temp().await;

        let first = store.add_one("podcasts", json!({"title": "A"})).await.unwrap();
        let second = store.add_one("podcasts", json!({"title": "B"})).await.unwrap();
        store
            .write_one("podcasts", "explicit", json!({"title": "C"}), WriteMode::Replace)
            .await
            .unwrap();

        let docs = store.read_all("podcasts").await.unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), second.as_str(), "explicit"]);
        assert!(store.read_all("events").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_keeps_position_and_merge_keeps_fields() {
        let (store, _dir) = open_temp().await;

        store
            .write_one("content", "hero", json!({"title": "A", "description": "D"}), WriteMode::Replace)
            .await
            .unwrap();
        store
            .write_one("content", "about", json!({"mainTitle": "M"}), WriteMode::Replace)
            .await
            .unwrap();
        store
            .write_one("content", "hero", json!({"title": "B"}), WriteMode::Merge)
            .await
            .unwrap();

        let hero = store.read_one("content", "hero").await.unwrap().unwrap();
        assert_eq!(hero, json!({"title": "B", "description": "D"}));

        let docs = store.read_all("content").await.unwrap();
        assert_eq!(docs[0].id, "hero");
        assert_eq!(docs[1].id, "about");
    }

    #[tokio::test]
    async fn test_delete_reports_missing() {
        let (store, _dir) = open_temp().await;
        let id = store.add_one("events", json!({"title": "X"})).await.unwrap();

        assert!(store.delete_one("events", &id).await.unwrap());
        assert!(!store.delete_one("events", &id).await.unwrap());
        assert!(store.read_one("events", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_writes_publish_events() {
        let (store, _dir) = open_temp().await;
        let mut sub = store.subscribe("leads");

        let id = store.add_one("leads", json!({"name": "N"})).await.unwrap();
        let event = sub.recv().await.unwrap();
        assert_eq!(event.id.as_deref(), Some(id.as_str()));
        assert_eq!(event.kind, ChangeKind::Written);
    }
}
