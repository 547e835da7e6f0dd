//! Admin authentication gate.
//!
//! A single admin identity signs in with email and password and receives an
//! opaque session token. Sessions are persisted in the document store so a
//! restart does not log the admin out. Credentials are compared in constant
//! time to mitigate timing attacks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use crate::db::{DocumentStore, WriteMode};
use crate::errors::{AppError, ErrorResponse};

/// Header carrying the session token when no bearer token is sent.
pub const SESSION_HEADER: &str = "x-session-token";

/// Storage collection for persisted sessions.
const SESSIONS_COLLECTION: &str = "adminSessions";

/// Authenticated admin identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: String,
}

/// A signed-in session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// External identity provider boundary.
pub trait IdentityProvider: Send + Sync {
    /// `None` when the credentials are not valid.
    fn sign_in(&self, email: &str, password: &str) -> Option<User>;
}

/// Single admin account configured at startup.
pub struct StaticIdentityProvider {
    email: String,
    password: Option<String>,
}

impl StaticIdentityProvider {
    pub fn new(email: impl Into<String>, password: Option<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.password.is_some()
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn sign_in(&self, email: &str, password: &str) -> Option<User> {
        let expected = self.password.as_deref()?;

        // Evaluate both comparisons so timing does not reveal which one failed.
        let email_ok = constant_time_compare(
            &email.trim().to_ascii_lowercase(),
            &self.email.to_ascii_lowercase(),
        );
        let password_ok = constant_time_compare(password, expected);

        (email_ok & password_ok).then(|| User {
            uid: format!("admin-{}", self.email.to_ascii_lowercase()),
            email: self.email.clone(),
        })
    }
}

/// Process-wide login state shared by every request.
pub struct AuthGate {
    provider: Box<dyn IdentityProvider>,
    docs: Arc<dyn DocumentStore>,
    sessions: RwLock<HashMap<String, User>>,
    login_open: AtomicBool,
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("login_open", &self.is_login_open())
            .finish_non_exhaustive()
    }
}

impl AuthGate {
    pub fn new(provider: Box<dyn IdentityProvider>, docs: Arc<dyn DocumentStore>) -> Self {
        Self {
            provider,
            docs,
            sessions: RwLock::new(HashMap::new()),
            login_open: AtomicBool::new(false),
        }
    }

    /// Reload sessions persisted by a previous run.
    pub async fn restore(&self) -> Result<usize, AppError> {
        let stored = self.docs.read_all(SESSIONS_COLLECTION).await?;

        let mut sessions = self.sessions.write().await;
        for doc in stored {
            match serde_json::from_value::<User>(doc.body) {
                Ok(user) => {
                    sessions.insert(doc.id, user);
                }
                Err(e) => tracing::warn!("Skipping unreadable session: {}", e),
            }
        }

        Ok(sessions.len())
    }

    pub fn open_login_prompt(&self) {
        self.login_open.store(true, Ordering::SeqCst);
    }

    pub fn close_login_prompt(&self) {
        self.login_open.store(false, Ordering::SeqCst);
    }

    pub fn is_login_open(&self) -> bool {
        self.login_open.load(Ordering::SeqCst)
    }

    /// Sign in; `None` on invalid credentials, with no session created.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<Session>, AppError> {
        let Some(user) = self.provider.sign_in(email, password) else {
            tracing::warn!("Rejected admin login");
            return Ok(None);
        };

        let token = uuid::Uuid::new_v4().to_string();
        self.docs
            .write_one(
                SESSIONS_COLLECTION,
                &token,
                serde_json::to_value(&user)?,
                WriteMode::Replace,
            )
            .await?;
        self.sessions
            .write()
            .await
            .insert(token.clone(), user.clone());
        self.close_login_prompt();

        tracing::info!("Admin {} signed in", user.email);
        Ok(Some(Session { token, user }))
    }

    /// End a session. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let removed = self.sessions.write().await.remove(token);
        self.docs.delete_one(SESSIONS_COLLECTION, token).await?;
        self.close_login_prompt();

        if let Some(user) = removed {
            tracing::info!("Admin {} signed out", user.email);
        }
        Ok(())
    }

    pub async fn current_user(&self, token: &str) -> Option<User> {
        self.sessions.read().await.get(token).cloned()
    }
}

/// Extract the session token from `Authorization: Bearer` or the session header.
pub fn session_token(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .or_else(|| headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok()))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Middleware admitting only requests with a live admin session.
pub async fn require_admin(gate: Arc<AuthGate>, request: Request, next: Next) -> Response {
    let Some(token) = session_token(request.headers()) else {
        return unauthorized_response("Missing session token");
    };

    match gate.current_user(&token).await {
        Some(_) => next.run(request).await,
        None => unauthorized_response("Invalid or expired session"),
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse::new(&AppError::Unauthorized(message.to_string()), 0);
    (StatusCode::UNAUTHORIZED, Json(json!(body))).into_response()
}
