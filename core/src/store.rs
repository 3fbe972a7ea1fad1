//! Record storage contract and the in-memory store.

use crate::{client, error::Result, Client, ClientDraft, ClientId, Error};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Persistence interface for client records.
///
/// Implementations assign ids that strictly increase and are never reused,
/// stamp `created_at` once, and list records in id order.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Persist a new client and return it with its assigned id.
    async fn add(&self, draft: ClientDraft) -> Result<Client>;

    /// Persist several clients as one unit: either all are stored or none.
    ///
    /// The default inserts one at a time and is only atomic for stores
    /// whose `add` cannot fail.
    async fn add_many(&self, drafts: Vec<ClientDraft>) -> Result<Vec<Client>> {
        let mut added = Vec::with_capacity(drafts.len());
        for draft in drafts {
            added.push(self.add(draft).await?);
        }
        Ok(added)
    }

    /// Every stored client, in id order.
    async fn list_all(&self) -> Result<Vec<Client>>;

    /// Remove a client permanently.
    ///
    /// Returns [`Error::NotFound`] if no client has this id.
    async fn delete(&self, id: ClientId) -> Result<()>;

    /// Number of stored clients.
    async fn count(&self) -> Result<u64>;
}

#[derive(Debug)]
struct Inner {
    next_id: ClientId,
    clients: BTreeMap<ClientId, Client>,
}

/// A [`ClientStore`] that keeps everything in process memory.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store. The first id handed out is 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                clients: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave `Inner` half-updated.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store a draft, stamping it with the current time.
    pub fn insert(&self, draft: ClientDraft) -> Client {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let record = draft.into_client(id, client::now());
        inner.clients.insert(id, record.clone());
        record
    }

    /// Store several drafts under a single lock, so ids are consecutive.
    pub fn insert_many(&self, drafts: Vec<ClientDraft>) -> Vec<Client> {
        let mut inner = self.lock();
        let created_at = client::now();

        drafts
            .into_iter()
            .map(|draft| {
                let id = inner.next_id;
                inner.next_id += 1;
                let record = draft.into_client(id, created_at);
                inner.clients.insert(id, record.clone());
                record
            })
            .collect()
    }

    /// Copy of all records in id order.
    pub fn snapshot(&self) -> Vec<Client> {
        self.lock().clients.values().cloned().collect()
    }

    /// Remove a record by id.
    pub fn remove(&self, id: ClientId) -> Result<Client> {
        self.lock().clients.remove(&id).ok_or(Error::NotFound(id))
    }

    /// Look up a single record.
    pub fn get(&self, id: ClientId) -> Option<Client> {
        self.lock().clients.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn add(&self, draft: ClientDraft) -> Result<Client> {
        Ok(self.insert(draft))
    }

    async fn add_many(&self, drafts: Vec<ClientDraft>) -> Result<Vec<Client>> {
        Ok(self.insert_many(drafts))
    }

    async fn list_all(&self) -> Result<Vec<Client>> {
        Ok(self.snapshot())
    }

    async fn delete(&self, id: ClientId) -> Result<()> {
        self.remove(id).map(|_| ())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.len() as u64)
    }
}
