//! Appointment records and their audit log.
//!
//! An [`Appointment`] books one pet with one veterinarian at a date and
//! time. Every created appointment is also snapshotted into the audit log
//! as an [`AppointmentAudit`] row; the log keeps no foreign keys so its
//! entries survive whatever later happens to the appointment.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::id::{AppointmentId, PetId, VetId};

/// A persisted appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pet_id: PetId,
    pub vet_id: VetId,
    pub description: String,
}

/// Fields for an appointment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pet_id: PetId,
    pub vet_id: VetId,
    pub description: String,
}

/// One audit log entry: a snapshot of an appointment at write time.
///
/// `recorded_at` is assigned by the store at the moment of insertion and is
/// independent of the appointment's own date and time fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentAudit {
    pub audit_id: i32,
    pub appointment_id: AppointmentId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pet_id: PetId,
    pub vet_id: VetId,
    pub description: String,
    pub recorded_at: NaiveDateTime,
}
