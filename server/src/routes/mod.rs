//! HTTP route definitions.

mod clients;
mod export;
mod health;
mod pages;

use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(pages::routes())
        .merge(clients::routes())
        .merge(export::routes())
}
