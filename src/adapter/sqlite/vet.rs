//! SQLite veterinarian store implementation.

use diesel::prelude::*;

use crate::adapter::sqlite::database::connection::{last_insert_rowid, DbPool};
use crate::adapter::sqlite::database::model::{NewVetRow, VetRow};
use crate::adapter::sqlite::database::schema::veterinarians;
use crate::domain::id::VetId;
use crate::domain::vet::{NewVeterinarian, Veterinarian};
use crate::error::{Error, Result};
use crate::port::store::VetStore;

/// SQLite-backed veterinarian store.
pub struct SqliteVetStore {
    pool: DbPool,
}

impl SqliteVetStore {
    /// Create a new veterinarian store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: VetRow) -> Veterinarian {
        Veterinarian {
            id: VetId::new(row.vet_id),
            name: row.name,
            surname: row.surname,
            specialty: row.specialty,
            phone: row.phone,
            email: row.email,
        }
    }
}

impl VetStore for SqliteVetStore {
    fn create(&self, vet: &NewVeterinarian) -> Result<Veterinarian> {
        let row = NewVetRow {
            name: vet.name.clone(),
            surname: vet.surname.clone(),
            specialty: vet.specialty.clone(),
            phone: vet.phone.clone(),
            email: vet.email.clone(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(veterinarians::table)
                    .values(&row)
                    .execute(conn)?;
                last_insert_rowid(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Veterinarian {
            id: VetId::new(id),
            name: row.name,
            surname: row.surname,
            specialty: row.specialty,
            phone: row.phone,
            email: row.email,
        })
    }

    fn list(&self) -> Result<Vec<Veterinarian>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<VetRow> = veterinarians::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    fn delete_by_email(&self, email: &str) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted =
            diesel::delete(veterinarians::table.filter(veterinarians::email.eq(email)))
                .execute(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}
