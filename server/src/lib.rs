//! Clientbook Server - client records over HTTP with CSV, HTML and PDF export.
//!
//! The binary wires a SQLite-backed store into [`app`]; tests pass any other
//! [`ClientStore`], usually the in-memory one from `clientbook-core`.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;

use axum::Router;
use clientbook_core::{ClientStore, ExportOptions};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClientStore>,
    pub export_options: Arc<ExportOptions>,
}

impl AppState {
    pub fn new(store: Arc<dyn ClientStore>, export_options: ExportOptions) -> Self {
        Self {
            store,
            export_options: Arc::new(export_options),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
