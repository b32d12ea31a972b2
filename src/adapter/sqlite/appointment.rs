//! SQLite appointment store implementation.
//!
//! Appointment creation also writes the audit log: the new row is
//! snapshotted into `appointment_audit` inside the same transaction, with
//! `recorded_at` taken from the wall clock at insert time.

use chrono::Utc;
use diesel::prelude::*;
use tracing::debug;

use crate::adapter::sqlite::database::connection::{last_insert_rowid, DbPool};
use crate::adapter::sqlite::database::model::{
    AppointmentRow, AuditRow, NewAppointmentRow, NewAuditRow,
};
use crate::adapter::sqlite::database::schema::{appointment_audit, appointments};
use crate::domain::appointment::{Appointment, AppointmentAudit, NewAppointment};
use crate::domain::id::{AppointmentId, PetId, VetId};
use crate::error::{Error, Result};
use crate::port::store::AppointmentStore;

/// SQLite-backed appointment store.
pub struct SqliteAppointmentStore {
    pool: DbPool,
}

impl SqliteAppointmentStore {
    /// Create a new appointment store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: AppointmentRow) -> Appointment {
        Appointment {
            id: AppointmentId::new(row.appointment_id),
            date: row.date,
            time: row.time,
            pet_id: PetId::new(row.pet_id),
            vet_id: VetId::new(row.vet_id),
            description: row.description,
        }
    }

    fn audit_from_row(row: AuditRow) -> AppointmentAudit {
        AppointmentAudit {
            audit_id: row.audit_id,
            appointment_id: AppointmentId::new(row.appointment_id),
            date: row.date,
            time: row.time,
            pet_id: PetId::new(row.pet_id),
            vet_id: VetId::new(row.vet_id),
            description: row.description,
            recorded_at: row.recorded_at,
        }
    }
}

impl AppointmentStore for SqliteAppointmentStore {
    fn create(&self, appointment: &NewAppointment) -> Result<Appointment> {
        let row = NewAppointmentRow {
            date: appointment.date,
            time: appointment.time,
            pet_id: appointment.pet_id.value(),
            vet_id: appointment.vet_id.value(),
            description: appointment.description.clone(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(appointments::table)
                    .values(&row)
                    .execute(conn)?;
                let id = last_insert_rowid(conn)?;

                let audit = NewAuditRow {
                    appointment_id: id,
                    date: row.date,
                    time: row.time,
                    pet_id: row.pet_id,
                    vet_id: row.vet_id,
                    description: row.description.clone(),
                    recorded_at: Utc::now().naive_utc(),
                };
                diesel::insert_into(appointment_audit::table)
                    .values(&audit)
                    .execute(conn)?;

                Ok::<i32, diesel::result::Error>(id)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id, pet = %appointment.pet_id, vet = %appointment.vet_id, "Created appointment");

        Ok(Appointment {
            id: AppointmentId::new(id),
            date: row.date,
            time: row.time,
            pet_id: appointment.pet_id,
            vet_id: appointment.vet_id,
            description: row.description,
        })
    }

    fn list(&self) -> Result<Vec<Appointment>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<AppointmentRow> = appointments::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    fn delete(&self, id: AppointmentId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(appointments::table.find(id.value()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    fn list_audit(&self) -> Result<Vec<AppointmentAudit>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<AuditRow> = appointment_audit::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::audit_from_row).collect())
    }
}
