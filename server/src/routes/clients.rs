//! Client API routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use clientbook_core::{Client, ClientId, NewClient};

use crate::error::Result;
use crate::handlers::{
    handle_create, handle_delete, handle_list, CreateResponse, MessageResponse,
};
use crate::AppState;

/// Create client API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/clients", get(list_handler).post(create_handler))
        .route("/api/clients/{id}", delete(delete_handler))
}

/// GET /api/clients - List all clients.
async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Client>>> {
    let clients = handle_list(state.store.as_ref()).await?;
    Ok(Json(clients))
}

/// POST /api/clients - Add a client.
async fn create_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewClient>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>)> {
    let Json(input) = payload?;
    let response = handle_create(state.store.as_ref(), state.export_options.labels(), input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/clients/{id} - Delete a client.
async fn delete_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<ClientId>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    let Path(id) = id?;
    let response = handle_delete(state.store.as_ref(), state.export_options.labels(), id).await?;
    Ok(Json(response))
}
