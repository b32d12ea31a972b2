//! SQLite pet store implementation.

use diesel::prelude::*;

use crate::adapter::sqlite::database::connection::{last_insert_rowid, DbPool};
use crate::adapter::sqlite::database::model::{NewPetRow, PetRow};
use crate::adapter::sqlite::database::schema::pets;
use crate::domain::id::{ClientId, PetId};
use crate::domain::pet::{NewPet, Pet};
use crate::error::{Error, Result};
use crate::port::store::PetStore;

/// SQLite-backed pet store.
pub struct SqlitePetStore {
    pool: DbPool,
}

impl SqlitePetStore {
    /// Create a new pet store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: PetRow) -> Pet {
        Pet {
            id: PetId::new(row.pet_id),
            name: row.name,
            species: row.species,
            breed: row.breed,
            birth_date: row.birth_date,
            client_id: ClientId::new(row.client_id),
        }
    }
}

impl PetStore for SqlitePetStore {
    fn create(&self, pet: &NewPet) -> Result<Pet> {
        let row = NewPetRow {
            name: pet.name.clone(),
            species: pet.species.clone(),
            breed: pet.breed.clone(),
            birth_date: pet.birth_date,
            client_id: pet.client_id.value(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(pets::table).values(&row).execute(conn)?;
                last_insert_rowid(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Pet {
            id: PetId::new(id),
            name: row.name,
            species: row.species,
            breed: row.breed,
            birth_date: row.birth_date,
            client_id: pet.client_id,
        })
    }

    fn list(&self) -> Result<Vec<Pet>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<PetRow> = pets::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    fn delete(&self, id: PetId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(pets::table.find(id.value()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::sqlite::client::SqliteClientStore;
    use crate::adapter::sqlite::database::connection::{create_pool, run_migrations};
    use crate::domain::client::NewClient;
    use crate::port::store::ClientStore;
    use chrono::NaiveDate;

    fn setup_test_db() -> DbPool {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    fn owner(pool: &DbPool) -> ClientId {
        let clients = SqliteClientStore::new(pool.clone());
        clients
            .create(&NewClient {
                name: "Ana".into(),
                surname: "Reyes".into(),
                address: "12 Calle Mayor".into(),
                phone: "555-0101".into(),
                email: "ana@example.com".into(),
            })
            .unwrap()
            .id
    }

    fn sample_pet(client_id: ClientId) -> NewPet {
        NewPet {
            name: "Bobby".into(),
            species: "dog".into(),
            breed: "beagle".into(),
            birth_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            client_id,
        }
    }

    #[test]
    fn create_and_list_round_trips() {
        let pool = setup_test_db();
        let client_id = owner(&pool);
        let store = SqlitePetStore::new(pool);

        let created = store.create(&sample_pet(client_id)).unwrap();
        let all = store.list().unwrap();
        assert_eq!(all, vec![created]);
    }

    #[test]
    fn delete_by_id_removes_the_row() {
        let pool = setup_test_db();
        let client_id = owner(&pool);
        let store = SqlitePetStore::new(pool);

        let pet = store.create(&sample_pet(client_id)).unwrap();
        assert!(store.delete(pet.id).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let store = SqlitePetStore::new(setup_test_db());
        assert!(!store.delete(PetId::new(99)).unwrap());
    }

    #[test]
    fn pet_with_unknown_owner_is_rejected() {
        // foreign_keys pragma is on, so the engine enforces the reference
        let store = SqlitePetStore::new(setup_test_db());
        let err = store.create(&sample_pet(ClientId::new(404)));
        assert!(matches!(err, Err(Error::Database(_))));
    }
}
