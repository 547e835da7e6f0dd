//! Keyed collection endpoints shared by every editable collection.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{error, parse_body, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Editable, Record};
use crate::AppState;

/// GET /api/{collection} - List all items in display order.
pub async fn list_items<T: Record>(State(state): State<AppState>) -> ApiResult<Vec<T>> {
    let items = state.content.list::<T>().await;
    success(items, state.content.revision())
}

/// GET /api/{collection}/{id} - Get a single item.
pub async fn get_item<T: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<T> {
    let revision_id = state.content.revision();

    match state.content.get::<T>(&id).await {
        Some(item) => success(item, revision_id),
        None => error(
            AppError::NotFound(format!("{} {} not found", T::LABEL, id)),
            revision_id,
        ),
    }
}

/// POST /api/{collection} - Add an item. Any client-supplied id is ignored.
pub async fn create_item<T: Editable>(
    State(state): State<AppState>,
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<T> {
    let item = match parse_body(payload) {
        Ok(item) => item,
        Err(e) => return error(e, state.content.revision()),
    };

    match state.content.add(item).await {
        Ok(item) => success(item, state.content.revision()),
        Err(e) => error(e, state.content.revision()),
    }
}

/// PATCH /api/{collection}/{id} - Update the named fields of an item.
pub async fn update_item<T: Editable>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<T::Patch>, JsonRejection>,
) -> ApiResult<T> {
    let patch = match parse_body(payload) {
        Ok(patch) => patch,
        Err(e) => return error(e, state.content.revision()),
    };

    match state.content.update::<T>(&id, patch).await {
        Ok(item) => success(item, state.content.revision()),
        Err(e) => error(e, state.content.revision()),
    }
}

/// DELETE /api/{collection}/{id} - Delete an item; unknown ids succeed.
pub async fn delete_item<T: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    match state.content.delete::<T>(&id).await {
        Ok(_) => success((), state.content.revision()),
        Err(e) => error(e, state.content.revision()),
    }
}
