//! # Ticklist API Server
//!
//! A small multi-user to-do list service: register, log in, and manage a
//! personal task list.
//!
//! ## Architecture
//!
//! Built with Axum over PostgreSQL:
//! - Cookie-based login sessions (opaque tokens, hashed at rest)
//! - Per-user task CRUD, owner-scoped at the query layer
//! - Migrations run automatically at startup
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/ticklist cargo run -p ticklist-api
//! ```

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticklist_api::app::{build_router, AppState};
use ticklist_api::config::Config;
use ticklist_shared::db::{migrations, pool};
use ticklist_shared::store::postgres::PgStore;
use ticklist_shared::store::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticklist_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Ticklist API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let db_pool = pool::create_pool(pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    migrations::run_migrations(&db_pool).await?;

    let store = Arc::new(PgStore::new(db_pool));

    // Sessions past their expiry only linger until someone presents them;
    // sweep the leftovers once per boot.
    let purged = store.purge_expired_sessions().await?;
    if purged > 0 {
        tracing::info!(purged, "expired sessions removed");
    }

    let state = AppState::new(store, config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
