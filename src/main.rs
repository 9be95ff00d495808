//! GreenSteps Backend
//!
//! Serves lessons, eco-projects and resources from an in-memory store, with
//! per-session progress tracking and an admin content view.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionManager;
use config::Config;
use store::{NotificationLog, Store};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    /// Sink the store reports to; handlers drain it after each mutation.
    pub notifications: Arc<NotificationLog>,
    pub session: Arc<SessionManager>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let notifications = Arc::new(NotificationLog::new());
        let store = if config.seed_content {
            Store::seeded(notifications.clone())
        } else {
            Store::new(notifications.clone())
        };

        Self {
            store: Arc::new(RwLock::new(store)),
            notifications,
            session: Arc::new(SessionManager::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GreenSteps Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Seed content: {}", config.seed_content);

    let state = AppState::new(config);
    {
        let store = state.store.read().await;
        tracing::info!(
            lessons = store.lessons().len(),
            projects = store.projects().len(),
            resources = store.resources().len(),
            "Store initialized"
        );
    }

    let bind_addr = state.config.bind_addr;

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

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

    // API routes
    let api_routes = Router::new()
        // Store and derived views
        .route("/store", get(api::get_store))
        .route("/navigation", get(api::get_navigation))
        .route("/dashboard", get(api::get_dashboard))
        .route("/admin/overview", get(api::get_admin_overview))
        // Session
        .route("/session", get(api::get_session))
        .route("/session/login", post(api::login))
        .route("/session/logout", post(api::logout))
        // Lessons
        .route("/lessons", get(api::list_lessons).post(api::create_lesson))
        .route(
            "/lessons/{id}",
            get(api::get_lesson).delete(api::delete_lesson),
        )
        .route("/lessons/{id}/complete", post(api::complete_lesson))
        // Projects
        .route("/projects", get(api::list_projects).post(api::create_project))
        .route(
            "/projects/{id}",
            get(api::get_project).delete(api::delete_project),
        )
        .route("/projects/{id}/join", post(api::join_project))
        // Resources
        .route(
            "/resources",
            get(api::list_resources).post(api::create_resource),
        )
        .route(
            "/resources/{id}",
            get(api::get_resource).delete(api::delete_resource),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
