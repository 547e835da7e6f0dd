//! Whole-site content endpoints.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::models::{Section, SiteContent, SyncState, SECTIONS};
use crate::AppState;

/// Query parameters for the change long-poll.
#[derive(Debug, Default, Deserialize)]
pub struct ChangesQuery {
    /// Last revision the client has seen
    #[serde(default)]
    pub since: i64,
}

/// Long-poll result: `changed` is false when the wait timed out.
#[derive(Debug, Serialize)]
pub struct ContentChanges {
    pub changed: bool,
    pub content: SiteContent,
}

/// GET /api/content - Full site content.
pub async fn get_content(State(state): State<AppState>) -> ApiResult<SiteContent> {
    let content = state.content.snapshot().await;
    success(content, state.content.revision())
}

/// GET /api/content/changes?since=n - Wait for the revision to pass `since`.
pub async fn wait_for_changes(
    State(state): State<AppState>,
    Query(query): Query<ChangesQuery>,
) -> ApiResult<ContentChanges> {
    let (revision_id, changed) = state
        .content
        .wait_for_change(query.since, state.config.long_poll_timeout)
        .await;
    let content = state.content.snapshot().await;

    success(ContentChanges { changed, content }, revision_id)
}

/// GET /api/content/sync - Sync state of every slot and collection.
pub async fn get_sync_states(
    State(state): State<AppState>,
) -> ApiResult<BTreeMap<&'static str, SyncState>> {
    let states = state.content.sync_states().await;
    success(states, state.content.revision())
}

/// GET /api/sections - Page sections in render order.
pub async fn list_sections(State(state): State<AppState>) -> ApiResult<&'static [Section]> {
    success(SECTIONS, state.content.revision())
}
