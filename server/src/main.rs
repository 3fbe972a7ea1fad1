//! Clientbook Server - stores client contact records and exports them as
//! CSV, HTML or PDF documents.

use clientbook_core::seed_if_empty;
use clientbook_server::config::Config;
use clientbook_server::db::{self, SqliteStore};
use clientbook_server::{app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clientbook_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Clientbook Server on {}:{}", config.host, config.port);

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Initializing database schema...");
    db::init_schema(&pool).await?;

    let store = Arc::new(SqliteStore::new(pool));

    if config.seed_sample_data {
        let seeded = seed_if_empty(store.as_ref()).await?;
        if seeded > 0 {
            tracing::info!("Seeded {} sample clients", seeded);
        }
    }

    let state = AppState::new(store, config.export_options());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
