//! Singleton content slots (hero, about, recruitment, social links, privacy).

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::{error, parse_body, success, ApiResult};
use crate::models::Slot;
use crate::AppState;

/// GET /api/slots/{slot} - Current value of a slot.
pub async fn get_slot<S: Slot>(State(state): State<AppState>) -> ApiResult<S> {
    let slot = state.content.slot::<S>().await;
    success(slot, state.content.revision())
}

/// PUT /api/slots/{slot} - Merge the given fields into a slot.
pub async fn replace_slot<S: Slot>(
    State(state): State<AppState>,
    payload: Result<Json<S::Patch>, JsonRejection>,
) -> ApiResult<S> {
    let patch = match parse_body(payload) {
        Ok(patch) => patch,
        Err(e) => return error(e, state.content.revision()),
    };

    match state.content.replace::<S>(patch).await {
        Ok(slot) => success(slot, state.content.revision()),
        Err(e) => error(e, state.content.revision()),
    }
}
