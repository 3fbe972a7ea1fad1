//! Browser-facing pages.

use axum::{extract::State, response::Html, routing::get, Router};

use crate::error::Result;
use crate::handlers::handle_list;
use crate::pages::{clients_page, home_page};
use crate::AppState;

/// Create page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/clients", get(clients))
}

/// GET / - Landing page.
async fn home() -> Html<String> {
    Html(home_page())
}

/// GET /clients - Table of all clients.
async fn clients(State(state): State<AppState>) -> Result<Html<String>> {
    let clients = handle_list(state.store.as_ref()).await?;
    Ok(Html(clients_page(&clients, &state.export_options)))
}
