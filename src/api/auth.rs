//! Admin login endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error, parse_body, success, ApiResult};
use crate::auth::{session_token, Session, User};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Who is signed in, and whether the login prompt is showing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub user: Option<User>,
    pub login_open: bool,
}

/// POST /api/auth/login - Sign in and receive a session token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Session> {
    let revision_id = state.content.revision();
    let request = match parse_body(payload) {
        Ok(request) => request,
        Err(e) => return error(e, revision_id),
    };

    match state.auth.login(&request.email, &request.password).await {
        Ok(Some(session)) => success(session, revision_id),
        Ok(None) => error(
            AppError::Unauthorized("Invalid credentials".to_string()),
            revision_id,
        ),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/auth/logout - End the caller's session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    let revision_id = state.content.revision();

    let result = match session_token(&headers) {
        Some(token) => state.auth.logout(&token).await,
        None => {
            state.auth.close_login_prompt();
            Ok(())
        }
    };

    match result {
        Ok(()) => success((), revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/auth/session - Current user, if the token is live.
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<SessionStatus> {
    let user = match session_token(&headers) {
        Some(token) => state.auth.current_user(&token).await,
        None => None,
    };

    success(
        SessionStatus {
            user,
            login_open: state.auth.is_login_open(),
        },
        state.content.revision(),
    )
}

/// POST /api/auth/prompt/open - Show the login prompt.
pub async fn open_login_prompt(State(state): State<AppState>) -> ApiResult<bool> {
    state.auth.open_login_prompt();
    success(state.auth.is_login_open(), state.content.revision())
}

/// POST /api/auth/prompt/close - Hide the login prompt.
pub async fn close_login_prompt(State(state): State<AppState>) -> ApiResult<bool> {
    state.auth.close_login_prompt();
    success(state.auth.is_login_open(), state.content.revision())
}
