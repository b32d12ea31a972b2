//! Treatments and their assignment to appointments.

use super::id::{AppointmentId, TreatmentId};

/// A persisted treatment from the clinic's catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treatment {
    pub id: TreatmentId,
    pub name: String,
    pub description: String,
}

/// Fields for a treatment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTreatment {
    pub name: String,
    pub description: String,
}

/// A treatment prescribed during an appointment, keyed by
/// (appointment, treatment). Duration is in days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentTreatment {
    pub appointment_id: AppointmentId,
    pub treatment_id: TreatmentId,
    pub dosage: String,
    pub duration: i32,
}
