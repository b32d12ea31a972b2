//! SQLite treatment store implementation.

use diesel::prelude::*;

use crate::adapter::sqlite::database::connection::{last_insert_rowid, DbPool};
use crate::adapter::sqlite::database::model::{
    AppointmentTreatmentRow, NewTreatmentRow, TreatmentRow,
};
use crate::adapter::sqlite::database::schema::{appointment_treatments, treatments};
use crate::domain::id::{AppointmentId, TreatmentId};
use crate::domain::treatment::{AppointmentTreatment, NewTreatment, Treatment};
use crate::error::{Error, Result};
use crate::port::store::TreatmentStore;

/// SQLite-backed treatment store.
pub struct SqliteTreatmentStore {
    pool: DbPool,
}

impl SqliteTreatmentStore {
    /// Create a new treatment store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: TreatmentRow) -> Treatment {
        Treatment {
            id: TreatmentId::new(row.treatment_id),
            name: row.name,
            description: row.description,
        }
    }

    fn assignment_from_row(row: AppointmentTreatmentRow) -> AppointmentTreatment {
        AppointmentTreatment {
            appointment_id: AppointmentId::new(row.appointment_id),
            treatment_id: TreatmentId::new(row.treatment_id),
            dosage: row.dosage,
            duration: row.duration,
        }
    }
}

impl TreatmentStore for SqliteTreatmentStore {
    fn create(&self, treatment: &NewTreatment) -> Result<Treatment> {
        let row = NewTreatmentRow {
            name: treatment.name.clone(),
            description: treatment.description.clone(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(treatments::table)
                    .values(&row)
                    .execute(conn)?;
                last_insert_rowid(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Treatment {
            id: TreatmentId::new(id),
            name: row.name,
            description: row.description,
        })
    }

    fn list(&self) -> Result<Vec<Treatment>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<TreatmentRow> = treatments::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    fn delete(&self, id: TreatmentId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(treatments::table.find(id.value()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    fn assign(&self, assignment: &AppointmentTreatment) -> Result<()> {
        let row = AppointmentTreatmentRow {
            appointment_id: assignment.appointment_id.value(),
            treatment_id: assignment.treatment_id.value(),
            dosage: assignment.dosage.clone(),
            duration: assignment.duration,
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::insert_into(appointment_treatments::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    fn list_assignments(&self) -> Result<Vec<AppointmentTreatment>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<AppointmentTreatmentRow> = appointment_treatments::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::assignment_from_row).collect())
    }

    fn unassign(&self, appointment_id: AppointmentId, treatment_id: TreatmentId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(
            appointment_treatments::table.find((appointment_id.value(), treatment_id.value())),
        )
        .execute(&mut conn)
        .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::sqlite::appointment::SqliteAppointmentStore;
    use crate::adapter::sqlite::client::SqliteClientStore;
    use crate::adapter::sqlite::database::connection::{create_pool, run_migrations};
    use crate::adapter::sqlite::pet::SqlitePetStore;
    use crate::adapter::sqlite::vet::SqliteVetStore;
    use crate::domain::appointment::NewAppointment;
    use crate::domain::client::NewClient;
    use crate::domain::pet::NewPet;
    use crate::domain::vet::NewVeterinarian;
    use crate::port::store::{AppointmentStore, ClientStore, PetStore, VetStore};
    use chrono::{NaiveDate, NaiveTime};

    fn setup_test_db() -> DbPool {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    fn booked_appointment(pool: &DbPool) -> AppointmentId {
        let client = SqliteClientStore::new(pool.clone())
            .create(&NewClient {
                name: "Ana".into(),
                surname: "Reyes".into(),
                address: "12 Calle Mayor".into(),
                phone: "555-0101".into(),
                email: "ana@example.com".into(),
            })
            .unwrap();
        let pet = SqlitePetStore::new(pool.clone())
            .create(&NewPet {
                name: "Bobby".into(),
                species: "dog".into(),
                breed: "beagle".into(),
                birth_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
                client_id: client.id,
            })
            .unwrap();
        let vet = SqliteVetStore::new(pool.clone())
            .create(&NewVeterinarian {
                name: "Marta".into(),
                surname: "Gil".into(),
                specialty: "surgery".into(),
                phone: "555-0202".into(),
                email: "marta@clinic.example".into(),
            })
            .unwrap();
        SqliteAppointmentStore::new(pool.clone())
            .create(&NewAppointment {
                date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
                time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
                pet_id: pet.id,
                vet_id: vet.id,
                description: "annual checkup".into(),
            })
            .unwrap()
            .id
    }

    #[test]
    fn create_and_list_round_trips() {
        let store = SqliteTreatmentStore::new(setup_test_db());
        let created = store
            .create(&NewTreatment {
                name: "Deworming".into(),
                description: "broad-spectrum".into(),
            })
            .unwrap();
        assert_eq!(store.list().unwrap(), vec![created]);
    }

    #[test]
    fn assignment_round_trips_and_duplicate_is_rejected() {
        let pool = setup_test_db();
        let appointment_id = booked_appointment(&pool);
        let store = SqliteTreatmentStore::new(pool);

        let treatment = store
            .create(&NewTreatment {
                name: "Deworming".into(),
                description: "broad-spectrum".into(),
            })
            .unwrap();

        let assignment = AppointmentTreatment {
            appointment_id,
            treatment_id: treatment.id,
            dosage: "5mg twice daily".into(),
            duration: 7,
        };
        store.assign(&assignment).unwrap();
        assert_eq!(store.list_assignments().unwrap(), vec![assignment.clone()]);

        assert!(matches!(store.assign(&assignment), Err(Error::Database(_))));

        assert!(store.unassign(appointment_id, treatment.id).unwrap());
        assert!(store.list_assignments().unwrap().is_empty());
    }

    #[test]
    fn delete_unknown_treatment_is_a_noop() {
        let store = SqliteTreatmentStore::new(setup_test_db());
        assert!(!store.delete(TreatmentId::new(5)).unwrap());
    }
}
