//! Content synchronization store.
//!
//! One `ContentStore` is built at startup and shared through the application
//! state. It mirrors every slot and collection from the document store into
//! local state, seeds compiled-in defaults into empty storage, and writes all
//! admin edits through to storage. Background tasks keep the mirror current by
//! consuming the store's change subscriptions.
//!
//! Concurrent edits are last-write-wins; there is no version check.

mod retry;

pub use retry::RetryPolicy;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use crate::db::{DocumentStore, Subscription, WriteMode};
use crate::errors::AppError;
use crate::models::{
    AboutData, BoardMember, Department, Editable, EventItem, HeroData, Lead, PastLeadTenure,
    PastTenure, Podcast, PrivacyData, RecruitmentData, Record, SiteContent, Slot, SocialLinks,
    SyncState, Tenure, Testimonial, SLOTS_COLLECTION,
};

pub struct ContentStore {
    docs: Arc<dyn DocumentStore>,
    state: RwLock<SiteContent>,
    sync: RwLock<BTreeMap<&'static str, SyncState>>,
    revision: watch::Sender<i64>,
    retry: RetryPolicy,
    mirrors: Mutex<Vec<JoinHandle<()>>>,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("backend", &self.docs.backend_name())
            .field("revision", &self.revision())
            .finish()
    }
}

impl ContentStore {
    /// Until `initialize` runs, readers see the compiled-in defaults.
    pub fn new(docs: Arc<dyn DocumentStore>, retry: RetryPolicy) -> Arc<Self> {
        let sync = slot_keys()
            .into_iter()
            .chain(collection_names())
            .map(|name| (name, SyncState::Uninitialized))
            .collect();
        let (revision, _) = watch::channel(0);

        Arc::new(Self {
            docs,
            state: RwLock::new(SiteContent::compiled_defaults()),
            sync: RwLock::new(sync),
            revision,
            retry,
            mirrors: Mutex::new(Vec::new()),
        })
    }

    /// Load or seed every slot and collection, then start mirroring changes.
    ///
    /// Storage failures are logged and leave the affected entry showing its
    /// defaults; the mirror picks it up on the next change.
    pub async fn initialize(self: &Arc<Self>) {
        let results = [
            (HeroData::KEY, self.init_slot::<HeroData>().await),
            (AboutData::KEY, self.init_slot::<AboutData>().await),
            (RecruitmentData::KEY, self.init_slot::<RecruitmentData>().await),
            (SocialLinks::KEY, self.init_slot::<SocialLinks>().await),
            (PrivacyData::KEY, self.init_slot::<PrivacyData>().await),
            (Department::COLLECTION, self.init_collection::<Department>().await),
            (EventItem::COLLECTION, self.init_collection::<EventItem>().await),
            (BoardMember::COLLECTION, self.init_collection::<BoardMember>().await),
            (Lead::COLLECTION, self.init_collection::<Lead>().await),
            (Podcast::COLLECTION, self.init_collection::<Podcast>().await),
            (Testimonial::COLLECTION, self.init_collection::<Testimonial>().await),
            (PastTenure::COLLECTION, self.init_collection::<PastTenure>().await),
            (PastLeadTenure::COLLECTION, self.init_collection::<PastLeadTenure>().await),
        ];

        let mut failures = 0;
        for (name, result) in results {
            if let Err(e) = result {
                failures += 1;
                tracing::error!("Failed to load {}: {}", name, e);
            }
        }

        self.start_mirroring();

        if failures == 0 {
            tracing::info!(
                "Content store live on {} backend (revision {})",
                self.docs.backend_name(),
                self.revision()
            );
        } else {
            tracing::warn!("Content store started with {} unavailable entries", failures);
        }
    }

    async fn init_slot<S: Slot>(&self) -> Result<(), AppError> {
        let value = match self.docs.read_one(SLOTS_COLLECTION, S::KEY).await? {
            Some(body) => S::from_document(body),
            None => {
                self.set_sync(S::KEY, SyncState::Seeding).await;
                let seed = S::seed();
                let body = seed.to_document()?;
                let docs = &self.docs;
                self.retry
                    .run("seed slot", move || {
                        docs.write_one(SLOTS_COLLECTION, S::KEY, body.clone(), WriteMode::Replace)
                    })
                    .await?;
                tracing::info!("Seeded slot {}", S::KEY);
                seed
            }
        };

        *S::get_mut(&mut *self.state.write().await) = value;
        self.set_sync(S::KEY, SyncState::Live).await;
        self.bump_revision();
        Ok(())
    }

    async fn init_collection<T: Record>(&self) -> Result<(), AppError> {
        let stored = self.docs.read_all(T::COLLECTION).await?;

        let items = if stored.is_empty() {
            self.set_sync(T::COLLECTION, SyncState::Seeding).await;
            let mut seeded = Vec::new();
            for mut item in T::seed() {
                let body = item.to_body()?;
                if item.id().is_empty() {
                    let id = self.docs.add_one(T::COLLECTION, body).await?;
                    item.set_id(id);
                } else {
                    let docs = &self.docs;
                    let id = item.id();
                    self.retry
                        .run("seed item", move || {
                            docs.write_one(T::COLLECTION, id, body.clone(), WriteMode::Replace)
                        })
                        .await?;
                }
                seeded.push(item);
            }
            if !seeded.is_empty() {
                tracing::info!("Seeded {} with {} items", T::COLLECTION, seeded.len());
            }
            seeded
        } else {
            stored
                .into_iter()
                .map(|doc| T::from_stored(doc.id, doc.body))
                .collect()
        };

        *T::items_mut(&mut *self.state.write().await) = items;
        self.set_sync(T::COLLECTION, SyncState::Live).await;
        self.bump_revision();
        Ok(())
    }

    // ==================== MIRRORING ====================

    fn start_mirroring(self: &Arc<Self>) {
        let mut handles = vec![self.mirror_slots(self.docs.subscribe(SLOTS_COLLECTION))];
        handles.push(self.mirror_collection::<Department>());
        handles.push(self.mirror_collection::<EventItem>());
        handles.push(self.mirror_collection::<BoardMember>());
        handles.push(self.mirror_collection::<Lead>());
        handles.push(self.mirror_collection::<Podcast>());
        handles.push(self.mirror_collection::<Testimonial>());
        handles.push(self.mirror_collection::<PastTenure>());
        handles.push(self.mirror_collection::<PastLeadTenure>());

        if let Ok(mut mirrors) = self.mirrors.lock() {
            for old in mirrors.drain(..) {
                old.abort();
            }
            mirrors.extend(handles);
        }
    }

    fn mirror_collection<T: Record>(self: &Arc<Self>) -> JoinHandle<()> {
        let mut subscription = self.docs.subscribe(T::COLLECTION);
        let store: Weak<Self> = Arc::downgrade(self);

        tokio::spawn(async move {
            while subscription.recv().await.is_some() {
                let Some(store) = store.upgrade() else {
                    break;
                };
                if let Err(e) = store.reload_collection::<T>().await {
                    tracing::error!("Failed to refresh {}: {}", T::COLLECTION, e);
                }
            }
            tracing::debug!("Mirror for {} stopped", subscription.collection());
        })
    }

    fn mirror_slots(self: &Arc<Self>, mut subscription: Subscription) -> JoinHandle<()> {
        let store: Weak<Self> = Arc::downgrade(self);

        tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                let Some(store) = store.upgrade() else {
                    break;
                };
                let result = match event.id.as_deref() {
                    Some(HeroData::KEY) => store.reload_slot::<HeroData>().await,
                    Some(AboutData::KEY) => store.reload_slot::<AboutData>().await,
                    Some(RecruitmentData::KEY) => store.reload_slot::<RecruitmentData>().await,
                    Some(SocialLinks::KEY) => store.reload_slot::<SocialLinks>().await,
                    Some(PrivacyData::KEY) => store.reload_slot::<PrivacyData>().await,
                    Some(other) => {
                        tracing::debug!("Ignoring change to unknown slot {}", other);
                        Ok(())
                    }
                    None => store.reload_all_slots().await,
                };
                if let Err(e) = result {
                    tracing::error!("Failed to refresh slots: {}", e);
                }
            }
            tracing::debug!("Slot mirror stopped");
        })
    }

    async fn reload_all_slots(&self) -> Result<(), AppError> {
        self.reload_slot::<HeroData>().await?;
        self.reload_slot::<AboutData>().await?;
        self.reload_slot::<RecruitmentData>().await?;
        self.reload_slot::<SocialLinks>().await?;
        self.reload_slot::<PrivacyData>().await
    }

    async fn reload_slot<S: Slot>(&self) -> Result<(), AppError> {
        let Some(body) = self.docs.read_one(SLOTS_COLLECTION, S::KEY).await? else {
            return Ok(());
        };
        let value = S::from_document(body);

        let changed = {
            let mut state = self.state.write().await;
            let current = S::get_mut(&mut state);
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };

        self.set_sync(S::KEY, SyncState::Live).await;
        if changed {
            self.bump_revision();
        }
        Ok(())
    }

    async fn reload_collection<T: Record>(&self) -> Result<(), AppError> {
        let items: Vec<T> = self
            .docs
            .read_all(T::COLLECTION)
            .await?
            .into_iter()
            .map(|doc| T::from_stored(doc.id, doc.body))
            .collect();

        let changed = {
            let mut state = self.state.write().await;
            let current = T::items_mut(&mut state);
            if items.is_empty() && !current.is_empty() {
                // Transient empty reads must not wipe what is already displayed.
                tracing::debug!("Ignoring empty read of {}", T::COLLECTION);
                false
            } else if *current == items {
                false
            } else {
                *current = items;
                true
            }
        };

        self.set_sync(T::COLLECTION, SyncState::Live).await;
        if changed {
            self.bump_revision();
        }
        Ok(())
    }

    // ==================== READS ====================

    pub async fn snapshot(&self) -> SiteContent {
        self.state.read().await.clone()
    }

    pub async fn slot<S: Slot>(&self) -> S {
        S::get(&*self.state.read().await).clone()
    }

    pub async fn list<T: Record>(&self) -> Vec<T> {
        T::items(&*self.state.read().await).clone()
    }

    pub async fn get<T: Record>(&self, id: &str) -> Option<T> {
        T::items(&*self.state.read().await)
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    pub async fn sync_states(&self) -> BTreeMap<&'static str, SyncState> {
        self.sync.read().await.clone()
    }

    /// Monotonic counter bumped on every applied change.
    pub fn revision(&self) -> i64 {
        *self.revision.borrow()
    }

    /// Wait until the revision moves past `since` or `timeout` elapses.
    /// Returns the revision seen and whether it moved.
    pub async fn wait_for_change(&self, since: i64, timeout: Duration) -> (i64, bool) {
        let mut receiver = self.revision.subscribe();
        let moved = tokio::time::timeout(timeout, receiver.wait_for(|rev| *rev > since));
        let seen = match moved.await {
            Ok(Ok(rev)) => Some(*rev),
            _ => None,
        };

        match seen {
            Some(rev) => (rev, true),
            None => {
                let current = self.revision();
                (current, current > since)
            }
        }
    }

    // ==================== MUTATIONS ====================

    /// Replace-with-merge of a slot. Applied locally first, reverted if the write fails.
    pub async fn replace<S: Slot>(&self, patch: S::Patch) -> Result<S, AppError> {
        let (previous, updated) = {
            let mut state = self.state.write().await;
            let current = S::get_mut(&mut state);
            let previous = current.clone();
            current.apply(patch);
            (previous, current.clone())
        };
        self.bump_revision();

        let body = updated.to_document()?;
        let docs = &self.docs;
        let written = self
            .retry
            .run("replace slot", move || {
                docs.write_one(SLOTS_COLLECTION, S::KEY, body.clone(), WriteMode::Replace)
            })
            .await;

        if let Err(e) = written {
            let mut state = self.state.write().await;
            let current = S::get_mut(&mut state);
            if *current == updated {
                *current = previous;
            }
            drop(state);
            self.bump_revision();
            return Err(e);
        }

        tracing::info!("Updated slot {}", S::KEY);
        Ok(updated)
    }

    /// Add an item; the store assigns its id.
    pub async fn add<T: Editable>(&self, item: T) -> Result<T, AppError> {
        self.insert(item).await
    }

    /// Apply a partial patch to one item. Unknown ids are `NotFound`.
    pub async fn update<T: Editable>(&self, id: &str, patch: T::Patch) -> Result<T, AppError> {
        let body = self
            .docs
            .read_one(T::COLLECTION, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::LABEL, id)))?;

        let mut item = T::from_stored(id.to_string(), body);
        item.apply(patch);

        let body = item.to_body()?;
        let docs = &self.docs;
        self.retry
            .run("update item", move || {
                docs.write_one(T::COLLECTION, id, body.clone(), WriteMode::Replace)
            })
            .await?;

        {
            let mut state = self.state.write().await;
            let items = T::items_mut(&mut state);
            match items.iter_mut().find(|existing| existing.id() == id) {
                Some(existing) => *existing = item.clone(),
                None => items.push(item.clone()),
            }
        }
        self.bump_revision();

        tracing::info!("Updated {} {}", T::COLLECTION, id);
        Ok(item)
    }

    /// Delete one item. Deleting an unknown id succeeds and changes nothing.
    pub async fn delete<T: Record>(&self, id: &str) -> Result<bool, AppError> {
        let docs = &self.docs;
        let deleted = self
            .retry
            .run("delete item", move || docs.delete_one(T::COLLECTION, id))
            .await?;

        let removed = {
            let mut state = self.state.write().await;
            let items = T::items_mut(&mut state);
            let before = items.len();
            items.retain(|item| item.id() != id);
            items.len() != before
        };

        if removed || deleted {
            self.bump_revision();
            tracing::info!("Deleted {} {}", T::COLLECTION, id);
        }
        Ok(deleted)
    }

    /// Snapshot the live roster of `A::Member` under a year label.
    pub async fn archive<A: Tenure>(&self, year: &str) -> Result<A, AppError> {
        let year = year.trim();
        if year.is_empty() {
            return Err(AppError::Validation("Year label is required".to_string()));
        }

        let members = A::Member::items(&*self.state.read().await).clone();
        let tenure = self.insert(A::capture(year.to_string(), members)).await?;

        tracing::info!(
            "Archived {} members of {} as {}",
            tenure.members().len(),
            A::Member::COLLECTION,
            tenure.year()
        );
        Ok(tenure)
    }

    async fn insert<T: Record>(&self, item: T) -> Result<T, AppError> {
        let body = item.to_body()?;
        // Not retried: a failed add may still have landed, and a retry would duplicate it.
        let id = self.docs.add_one(T::COLLECTION, body.clone()).await?;
        let stored = T::from_stored(id, body);

        {
            // The mirror may already have picked the new document up.
            let mut state = self.state.write().await;
            let items = T::items_mut(&mut state);
            if !items.iter().any(|existing| existing.id() == stored.id()) {
                items.push(stored.clone());
            }
        }
        self.bump_revision();

        tracing::info!("Added {} {}", T::COLLECTION, stored.id());
        Ok(stored)
    }

    async fn set_sync(&self, name: &'static str, state: SyncState) {
        self.sync.write().await.insert(name, state);
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl Drop for ContentStore {
    fn drop(&mut self) {
        if let Ok(mut mirrors) = self.mirrors.lock() {
            for handle in mirrors.drain(..) {
                handle.abort();
            }
        }
    }
}

fn slot_keys() -> Vec<&'static str> {
    vec![
        HeroData::KEY,
        AboutData::KEY,
        RecruitmentData::KEY,
        SocialLinks::KEY,
        PrivacyData::KEY,
    ]
}

fn collection_names() -> Vec<&'static str> {
    vec![
        Department::COLLECTION,
        EventItem::COLLECTION,
        BoardMember::COLLECTION,
        Lead::COLLECTION,
        Podcast::COLLECTION,
        Testimonial::COLLECTION,
        PastTenure::COLLECTION,
        PastLeadTenure::COLLECTION,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDocumentStore;
    use crate::models::{defaults, DepartmentPatch, HeroPatch, PodcastPatch};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::db::StoredDocument;

    /// Memory store whose writes can be switched off.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryDocumentStore,
        fail_writes: AtomicBool,
    }

    #[async_trait]
    impl DocumentStore for FlakyStore {
        async fn read_one(&self, collection: &str, id: &str) -> Result<Option<Value>, AppError> {
            self.inner.read_one(collection, id).await
        }

        async fn read_all(&self, collection: &str) -> Result<Vec<StoredDocument>, AppError> {
            self.inner.read_all(collection).await
        }

        async fn write_one(
            &self,
            collection: &str,
            id: &str,
            body: Value,
            mode: WriteMode,
        ) -> Result<(), AppError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(AppError::Database("storage unavailable".to_string()));
            }
            self.inner.write_one(collection, id, body, mode).await
        }

        async fn add_one(&self, collection: &str, body: Value) -> Result<String, AppError> {
            self.inner.add_one(collection, body).await
        }

        async fn delete_one(&self, collection: &str, id: &str) -> Result<bool, AppError> {
            self.inner.delete_one(collection, id).await
        }

        fn subscribe(&self, collection: &str) -> Subscription {
            self.inner.subscribe(collection)
        }

        fn backend_name(&self) -> &'static str {
            "flaky"
        }
    }

    async fn started() -> (Arc<ContentStore>, Arc<MemoryDocumentStore>) {
        let docs = Arc::new(MemoryDocumentStore::new());
        let store = ContentStore::new(docs.clone(), RetryPolicy::new(1));
        store.initialize().await;
        (store, docs)
    }

    /// Wait for the mirror to apply a change made behind the store's back.
    async fn settle(store: &ContentStore, since: i64) {
        let (_, changed) = store.wait_for_change(since, Duration::from_secs(2)).await;
        assert!(changed, "mirror did not pick up the change");
    }

    #[tokio::test]
    async fn test_empty_store_seeds_defaults() {
        let (store, docs) = started().await;

        let depts = store.list::<Department>().await;
        assert_eq!(depts.len(), 8);
        let ids: HashSet<_> = depts.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids.len(), 8);

        assert_eq!(store.slot::<HeroData>().await, defaults::hero());
        assert!(docs.read_one(SLOTS_COLLECTION, "hero").await.unwrap().is_some());
        assert_eq!(docs.read_all("departments").await.unwrap().len(), 8);

        let states = store.sync_states().await;
        assert!(states.values().all(|s| *s == SyncState::Live));
    }

    #[tokio::test]
    async fn test_seeding_twice_does_not_duplicate() {
        let docs = Arc::new(MemoryDocumentStore::new());
        let first = ContentStore::new(docs.clone(), RetryPolicy::new(1));
        first.initialize().await;
        let second = ContentStore::new(docs.clone(), RetryPolicy::new(1));
        second.initialize().await;

        assert_eq!(docs.read_all("departments").await.unwrap().len(), 8);
        assert_eq!(docs.read_all("events").await.unwrap().len(), 5);
        assert_eq!(second.list::<Department>().await.len(), 8);
    }

    #[tokio::test]
    async fn test_existing_data_is_not_overwritten() {
        let docs = Arc::new(MemoryDocumentStore::new());
        docs.write_one(
            SLOTS_COLLECTION,
            "hero",
            json!({"title": "CUSTOM"}),
            WriteMode::Replace,
        )
        .await
        .unwrap();
        docs.add_one("podcasts", json!({"title": "Only one"}))
            .await
            .unwrap();

        let store = ContentStore::new(docs.clone(), RetryPolicy::new(1));
        store.initialize().await;

        let hero = store.slot::<HeroData>().await;
        assert_eq!(hero.title, "CUSTOM");
        assert_eq!(hero.description, "");
        let podcasts = store.list::<Podcast>().await;
        assert_eq!(podcasts.len(), 1);
        assert_eq!(podcasts[0].title, "Only one");
    }

    #[tokio::test]
    async fn test_add_podcast_assigns_id() {
        let (store, docs) = started().await;
        let before = store.list::<Podcast>().await.len();

        let added = store
            .add(Podcast {
                title: "Ep1".to_string(),
                host: "X".to_string(),
                duration: "10m".to_string(),
                image: "u".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(!added.id.is_empty());
        assert_eq!(added.title, "Ep1");
        assert_eq!(added.host, "X");
        assert_eq!(added.duration, "10m");
        assert_eq!(added.image, "u");
        assert_eq!(added.link, None);

        let podcasts = store.list::<Podcast>().await;
        assert_eq!(podcasts.len(), before + 1);
        assert_eq!(podcasts.last(), Some(&added));

        let stored = docs.read_all("podcasts").await.unwrap();
        assert!(stored.iter().any(|d| d.id == added.id && d.body["title"] == "Ep1"));
    }

    #[tokio::test]
    async fn test_update_changes_only_named_field() {
        let (store, docs) = started().await;
        let original = store.get::<Department>("rj-tam").await.unwrap();

        let patch: DepartmentPatch = serde_json::from_value(json!({
            "name": "RJ Tamil Nadu",
            "bogus": {"ui": "object"}
        }))
        .unwrap();
        let updated = store.update::<Department>("rj-tam", patch).await.unwrap();

        assert_eq!(updated.name, "RJ Tamil Nadu");
        assert_eq!(updated.icon, original.icon);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.color, original.color);
        assert_eq!(store.get::<Department>("rj-tam").await, Some(updated));

        let stored = docs.read_one("departments", "rj-tam").await.unwrap().unwrap();
        assert!(stored.get("bogus").is_none());
        assert!(stored.get("id").is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let (store, _docs) = started().await;
        let err = store
            .update::<Podcast>("missing", PodcastPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let (store, _docs) = started().await;
        let before = store.list::<EventItem>().await;

        assert!(store.delete::<EventItem>("3").await.unwrap());
        let after = store.list::<EventItem>().await;
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|e| e.id != "3"));

        let rev = store.revision();
        assert!(!store.delete::<EventItem>("does-not-exist").await.unwrap());
        assert_eq!(store.list::<EventItem>().await, after);
        assert_eq!(store.revision(), rev);
    }

    #[tokio::test]
    async fn test_replace_slot_merges_patch() {
        let (store, docs) = started().await;

        let patch: HeroPatch = serde_json::from_value(json!({"title": "NEW"})).unwrap();
        let hero = store.replace::<HeroData>(patch).await.unwrap();

        assert_eq!(hero.title, "NEW");
        assert_eq!(hero.description, defaults::hero().description);
        let stored = docs.read_one(SLOTS_COLLECTION, "hero").await.unwrap().unwrap();
        assert_eq!(stored["title"], "NEW");
        assert_eq!(stored["subtitle_p1"], "Feel the");
    }

    #[tokio::test]
    async fn test_archive_board_is_deep_copy() {
        let (store, _docs) = started().await;
        let live = store.list::<BoardMember>().await;
        assert_eq!(live.len(), 4);

        let tenure = store.archive::<PastTenure>("2023-24").await.unwrap();
        assert_eq!(tenure.year, "2023-24");
        assert_eq!(tenure.members.len(), 4);
        assert_eq!(store.list::<BoardMember>().await, live);

        let patch = serde_json::from_value(json!({"name": "Renamed"})).unwrap();
        store.update::<BoardMember>("1", patch).await.unwrap();
        store.delete::<BoardMember>("2").await.unwrap();

        let archived = store.get::<PastTenure>(&tenure.id).await.unwrap();
        assert_eq!(archived.members, live);
        assert_eq!(store.list::<PastTenure>().await.len(), 3);
    }

    #[tokio::test]
    async fn test_archive_leads_requires_year() {
        let (store, _docs) = started().await;
        let err = store.archive::<PastLeadTenure>("  ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let tenure = store.archive::<PastLeadTenure>("2024-25").await.unwrap();
        assert_eq!(tenure.leads.len(), 5);
        assert_eq!(store.list::<PastLeadTenure>().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mirror_applies_remote_changes() {
        let (store, docs) = started().await;

        let since = store.revision();
        docs.write_one(
            "testimonials",
            "remote",
            json!({"quote": "Pushed from elsewhere", "name": "Remote"}),
            WriteMode::Replace,
        )
        .await
        .unwrap();
        settle(&store, since).await;

        let remote = store.get::<Testimonial>("remote").await.unwrap();
        assert_eq!(remote.quote, "Pushed from elsewhere");
        assert_eq!(remote.designation, "");

        let since = store.revision();
        docs.write_one(
            SLOTS_COLLECTION,
            "recruitment",
            json!({"isOpen": true, "link": "https://forms"}),
            WriteMode::Replace,
        )
        .await
        .unwrap();
        settle(&store, since).await;
        assert!(store.slot::<RecruitmentData>().await.is_open);
    }

    #[tokio::test]
    async fn test_empty_read_does_not_clear_collection() {
        let (store, _docs) = started().await;
        store.reload_collection::<Podcast>().await.unwrap();
        assert_eq!(store.list::<Podcast>().await.len(), 4);

        // Storage emptied underneath a populated mirror.
        let docs = Arc::new(MemoryDocumentStore::new());
        let detached = ContentStore::new(docs, RetryPolicy::new(1));
        detached.reload_collection::<Podcast>().await.unwrap();
        assert_eq!(detached.list::<Podcast>().await.len(), 4);
    }

    #[tokio::test]
    async fn test_wait_for_change_times_out() {
        let (store, _docs) = started().await;
        let rev = store.revision();
        let (seen, changed) = store
            .wait_for_change(rev, Duration::from_millis(20))
            .await;
        assert_eq!(seen, rev);
        assert!(!changed);
    }

    #[tokio::test]
    async fn test_failed_slot_write_reverts_local_state() {
        let docs = Arc::new(FlakyStore::default());
        let store = ContentStore::new(docs.clone(), RetryPolicy::new(2));
        store.initialize().await;
        let before = store.slot::<HeroData>().await;

        docs.fail_writes.store(true, Ordering::SeqCst);
        let patch: HeroPatch = serde_json::from_value(json!({"title": "UNSAVED"})).unwrap();
        let err = store.replace::<HeroData>(patch).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(store.slot::<HeroData>().await, before);
        assert_eq!(store.snapshot().await.hero, before);
        let stored = docs.read_one(SLOTS_COLLECTION, "hero").await.unwrap().unwrap();
        assert_eq!(stored["title"], before.title.as_str());
    }
}
