//! SQLite client store implementation.

use diesel::prelude::*;

use crate::adapter::sqlite::database::connection::{last_insert_rowid, DbPool};
use crate::adapter::sqlite::database::model::{ClientRow, NewClientRow};
use crate::adapter::sqlite::database::schema::clients;
use crate::domain::client::{Client, NewClient};
use crate::domain::id::ClientId;
use crate::error::{Error, Result};
use crate::port::store::ClientStore;

/// SQLite-backed client store.
pub struct SqliteClientStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteClientStore {
    /// Create a new client store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(client: &NewClient) -> NewClientRow {
        NewClientRow {
            name: client.name.clone(),
            surname: client.surname.clone(),
            address: client.address.clone(),
            phone: client.phone.clone(),
            email: client.email.clone(),
        }
    }

    fn from_row(row: ClientRow) -> Client {
        Client {
            id: ClientId::new(row.client_id),
            name: row.name,
            surname: row.surname,
            address: row.address,
            phone: row.phone,
            email: row.email,
        }
    }
}

impl ClientStore for SqliteClientStore {
    fn create(&self, client: &NewClient) -> Result<Client> {
        let row = Self::to_row(client);
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(clients::table)
                    .values(&row)
                    .execute(conn)?;
                last_insert_rowid(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Client {
            id: ClientId::new(id),
            name: row.name,
            surname: row.surname,
            address: row.address,
            phone: row.phone,
            email: row.email,
        })
    }

    fn list(&self) -> Result<Vec<Client>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<ClientRow> = clients::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    fn delete_by_email(&self, email: &str) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(clients::table.filter(clients::email.eq(email)))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}
