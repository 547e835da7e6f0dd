//! Tenure archive endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use super::{error, parse_body, success, ApiResult};
use crate::models::Tenure;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ArchiveRequest {
    #[serde(default)]
    pub year: String,
}

/// POST /api/{board-members|leads}/archive - Snapshot the live roster under a year.
pub async fn archive_roster<A: Tenure>(
    State(state): State<AppState>,
    payload: Result<Json<ArchiveRequest>, JsonRejection>,
) -> ApiResult<A> {
    let request = match parse_body(payload) {
        Ok(request) => request,
        Err(e) => return error(e, state.content.revision()),
    };

    match state.content.archive::<A>(&request.year).await {
        Ok(tenure) => success(tenure, state.content.revision()),
        Err(e) => error(e, state.content.revision()),
    }
}
