//! VoiceIt Content Backend
//!
//! Serves the club website's editable content, seeds an empty store with the
//! compiled-in defaults and keeps every client in step with storage.

mod api;
mod auth;
mod config;
mod content;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::{AuthGate, StaticIdentityProvider};
use config::{Config, LogFormat};
use content::{ContentStore, RetryPolicy};
use models::{
    AboutData, BoardMember, Department, EventItem, HeroData, Lead, PastLeadTenure, PastTenure,
    Podcast, PrivacyData, RecruitmentData, SocialLinks, Testimonial,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub auth: Arc<AuthGate>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("Starting VoiceIt Content Backend");
    tracing::info!("Storage: {:?}", config.storage);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Open storage and load content, seeding anything missing
    let docs = db::open_store(&config).await?;
    tracing::info!("Document store: {}", docs.backend_name());

    let content = ContentStore::new(docs.clone(), RetryPolicy::new(config.write_retries));
    content.initialize().await;

    let provider =
        StaticIdentityProvider::new(config.admin_email.clone(), config.admin_password.clone());
    if !provider.is_enabled() {
        tracing::warn!(
            "No admin password configured (VOICEIT_ADMIN_PASSWORD). Admin login is disabled!"
        );
    }

    let auth = AuthGate::new(Box::new(provider), docs);
    match auth.restore().await {
        Ok(count) => tracing::info!("Restored {} admin sessions", count),
        Err(e) => tracing::warn!("Failed to restore admin sessions: {}", e),
    }

    // Create application state
    let state = AppState {
        content,
        auth: Arc::new(auth),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let gate = state.auth.clone();

    // Readable by every visitor
    let public_routes = Router::new()
        // Whole site
        .route("/content", get(api::get_content))
        .route("/content/changes", get(api::wait_for_changes))
        .route("/content/sync", get(api::get_sync_states))
        .route("/sections", get(api::list_sections))
        // Slots
        .route("/slots/hero", get(api::get_slot::<HeroData>))
        .route("/slots/about", get(api::get_slot::<AboutData>))
        .route("/slots/recruitment", get(api::get_slot::<RecruitmentData>))
        .route("/slots/social-links", get(api::get_slot::<SocialLinks>))
        .route("/slots/privacy", get(api::get_slot::<PrivacyData>))
        // Collections
        .route("/departments", get(api::list_items::<Department>))
        .route("/departments/{id}", get(api::get_item::<Department>))
        .route("/events", get(api::list_items::<EventItem>))
        .route("/events/{id}", get(api::get_item::<EventItem>))
        .route("/board-members", get(api::list_items::<BoardMember>))
        .route("/board-members/{id}", get(api::get_item::<BoardMember>))
        .route("/leads", get(api::list_items::<Lead>))
        .route("/leads/{id}", get(api::get_item::<Lead>))
        .route("/podcasts", get(api::list_items::<Podcast>))
        .route("/podcasts/{id}", get(api::get_item::<Podcast>))
        .route("/testimonials", get(api::list_items::<Testimonial>))
        .route("/testimonials/{id}", get(api::get_item::<Testimonial>))
        .route("/past-tenures", get(api::list_items::<PastTenure>))
        .route("/past-tenures/{id}", get(api::get_item::<PastTenure>))
        .route("/past-lead-tenures", get(api::list_items::<PastLeadTenure>))
        .route("/past-lead-tenures/{id}", get(api::get_item::<PastLeadTenure>))
        // Auth
        .route("/auth/login", post(api::login))
        .route("/auth/logout", post(api::logout))
        .route("/auth/session", get(api::get_session))
        .route("/auth/prompt/open", post(api::open_login_prompt))
        .route("/auth/prompt/close", post(api::close_login_prompt));

    // Writes require an admin session
    let admin_routes = Router::new()
        // Slots
        .route("/slots/hero", put(api::replace_slot::<HeroData>))
        .route("/slots/about", put(api::replace_slot::<AboutData>))
        .route("/slots/recruitment", put(api::replace_slot::<RecruitmentData>))
        .route("/slots/social-links", put(api::replace_slot::<SocialLinks>))
        .route("/slots/privacy", put(api::replace_slot::<PrivacyData>))
        // Departments
        .route("/departments", post(api::create_item::<Department>))
        .route("/departments/{id}", patch(api::update_item::<Department>))
        .route("/departments/{id}", delete(api::delete_item::<Department>))
        // Events
        .route("/events", post(api::create_item::<EventItem>))
        .route("/events/{id}", patch(api::update_item::<EventItem>))
        .route("/events/{id}", delete(api::delete_item::<EventItem>))
        // Board members
        .route("/board-members", post(api::create_item::<BoardMember>))
        .route("/board-members/archive", post(api::archive_roster::<PastTenure>))
        .route("/board-members/{id}", patch(api::update_item::<BoardMember>))
        .route("/board-members/{id}", delete(api::delete_item::<BoardMember>))
        // Leads
        .route("/leads", post(api::create_item::<Lead>))
        .route("/leads/archive", post(api::archive_roster::<PastLeadTenure>))
        .route("/leads/{id}", patch(api::update_item::<Lead>))
        .route("/leads/{id}", delete(api::delete_item::<Lead>))
        // Podcasts
        .route("/podcasts", post(api::create_item::<Podcast>))
        .route("/podcasts/{id}", patch(api::update_item::<Podcast>))
        .route("/podcasts/{id}", delete(api::delete_item::<Podcast>))
        // Testimonials
        .route("/testimonials", post(api::create_item::<Testimonial>))
        .route("/testimonials/{id}", patch(api::update_item::<Testimonial>))
        .route("/testimonials/{id}", delete(api::delete_item::<Testimonial>))
        // Archives are immutable; only removal is allowed
        .route("/past-tenures/{id}", delete(api::delete_item::<PastTenure>))
        .route(
            "/past-lead-tenures/{id}",
            delete(api::delete_item::<PastLeadTenure>),
        )
        // Apply admin session middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::require_admin(gate.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", public_routes.merge(admin_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
