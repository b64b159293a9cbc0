/// Application state and router builder
///
/// Defines the shared application state and builds the Axum router with all
/// routes and middleware.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use ticklist_api::{app::{build_router, AppState}, config::Config};
/// use ticklist_shared::store::memory::MemoryStore;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(Arc::new(MemoryStore::new()), config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use ticklist_shared::store::Store;

use crate::config::Config;
use crate::middleware::security::SecurityHeadersLayer;
use crate::middleware::session;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor; both fields
/// are Arcs, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// The persistence backend (Postgres in production, in-memory in tests)
    pub store: Arc<dyn Store>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: Arc<dyn Store>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /health              # Health check
/// ├── GET  /                    # Landing, or redirect when logged in
/// ├── GET,POST /login           # Login view / attempt login
/// ├── GET,POST /register        # Register view / attempt registration
/// ├── GET  /logout              # Close session
/// ├── GET,POST /new_task        # Add a task
/// ├── GET,POST /check_task/:id/ # Toggle a task
/// ├── GET,POST /delete/:id/     # Delete a task
/// └── GET,POST /:user_email     # Task view (path segment decorative)
/// ```
///
/// # Middleware Stack
///
/// 1. Session resolution (cookie → identity in request extensions)
/// 2. Logging (tower-http TraceLayer)
/// 3. Security headers
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let enable_hsts = state.config.session.secure_cookies;

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/", get(routes::home::index))
        .route(
            "/login",
            get(routes::auth::login_view).post(routes::auth::login),
        )
        .route(
            "/register",
            get(routes::auth::register_view).post(routes::auth::register),
        )
        .route("/logout", get(routes::auth::logout))
        .route(
            "/new_task",
            get(routes::tasks::new_task_view).post(routes::tasks::new_task),
        )
        // Registered with and without the trailing slash; browsers see the
        // slash form in the original URLs.
        .route(
            "/check_task/:id",
            get(routes::tasks::check_task).post(routes::tasks::check_task),
        )
        .route(
            "/check_task/:id/",
            get(routes::tasks::check_task).post(routes::tasks::check_task),
        )
        .route(
            "/delete/:id",
            get(routes::tasks::delete_task).post(routes::tasks::delete_task),
        )
        .route(
            "/delete/:id/",
            get(routes::tasks::delete_task).post(routes::tasks::delete_task),
        )
        .route(
            "/:user_email",
            get(routes::home::task_view).post(routes::home::task_view),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session::resolve_session,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SecurityHeadersLayer::new(enable_hsts))
        .with_state(state)
}
