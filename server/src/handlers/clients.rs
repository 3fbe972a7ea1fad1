//! Client handlers - list, create and delete records.

use crate::error::Result;
use clientbook_core::{Client, ClientId, ClientStore, Labels, NewClient};
use serde::{Deserialize, Serialize};

/// Response for a created client.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResponse {
    pub message: String,
    pub id: ClientId,
}

/// Response carrying only a status message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Every stored client in id order.
pub async fn handle_list(store: &dyn ClientStore) -> Result<Vec<Client>> {
    let clients = store.list_all().await?;
    tracing::debug!("Listing {} clients", clients.len());
    Ok(clients)
}

/// Validate and store a new client.
pub async fn handle_create(
    store: &dyn ClientStore,
    labels: &Labels,
    input: NewClient,
) -> Result<CreateResponse> {
    let draft = input.validate()?;

    let client = store.add(draft).await?;
    tracing::info!("Added client {} ({})", client.id, client.email);

    Ok(CreateResponse {
        message: labels.client_added.to_string(),
        id: client.id,
    })
}

/// Delete a client by id.
pub async fn handle_delete(
    store: &dyn ClientStore,
    labels: &Labels,
    id: ClientId,
) -> Result<MessageResponse> {
    store.delete(id).await?;
    tracing::info!("Deleted client {}", id);

    Ok(MessageResponse {
        message: labels.client_deleted.to_string(),
    })
}
