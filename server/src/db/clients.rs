//! Database operations for the clients table.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use clientbook_core::{Client, ClientDraft, ClientId, ClientStore, Error};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Pool;

/// A stored client row from the database.
#[derive(Debug)]
pub struct StoredClient {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: String,
    pub created_at: NaiveDateTime,
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for StoredClient {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(StoredClient {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            company: row.try_get("company")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl StoredClient {
    /// Convert database row to a core Client.
    pub fn into_client(self) -> Client {
        Client {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            created_at: self.created_at,
        }
    }
}

fn storage_error(e: sqlx::Error) -> Error {
    Error::Storage(e.to_string())
}

/// [`ClientStore`] backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Pool,
}

impl SqliteStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

#[async_trait]
impl ClientStore for SqliteStore {
    async fn add(&self, draft: ClientDraft) -> clientbook_core::error::Result<Client> {
        let created_at = clientbook_core::now();

        let result = sqlx::query(
            r#"
            INSERT INTO clients (name, email, phone, company, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(draft.phone.as_deref())
        .bind(&draft.company)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(draft.into_client(result.last_insert_rowid(), created_at))
    }

    async fn add_many(&self, drafts: Vec<ClientDraft>) -> clientbook_core::error::Result<Vec<Client>> {
        let created_at = clientbook_core::now();
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let mut added = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let result = sqlx::query(
                r#"
                INSERT INTO clients (name, email, phone, company, created_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(draft.phone.as_deref())
            .bind(&draft.company)
            .bind(created_at)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

            added.push(draft.into_client(result.last_insert_rowid(), created_at));
        }

        // Dropping `tx` on an early return rolls the batch back.
        tx.commit().await.map_err(storage_error)?;
        Ok(added)
    }

    async fn list_all(&self) -> clientbook_core::error::Result<Vec<Client>> {
        let rows = sqlx::query_as::<_, StoredClient>(
            r#"
            SELECT id, name, email, phone, company, created_at
            FROM clients
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(StoredClient::into_client).collect())
    }

    async fn delete(&self, id: ClientId) -> clientbook_core::error::Result<()> {
        let result = sqlx::query(r#"DELETE FROM clients WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    async fn count(&self) -> clientbook_core::error::Result<u64> {
        let result: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM clients"#)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.0 as u64)
    }
}
