//! `vetclinic appointment` handlers.

use tabled::{Table, Tabled};

use crate::adapter::sqlite::database::connection::DbPool;
use crate::adapter::sqlite::SqliteAppointmentStore;
use crate::cli::{output, AppointmentCommand};
use crate::domain::appointment::{Appointment, AppointmentAudit, NewAppointment};
use crate::domain::id::{AppointmentId, PetId, VetId};
use crate::error::Result;
use crate::port::store::AppointmentStore;

#[derive(Tabled)]
struct AppointmentView {
    id: i32,
    date: String,
    time: String,
    #[tabled(rename = "pet")]
    pet_id: i32,
    #[tabled(rename = "vet")]
    vet_id: i32,
    description: String,
}

impl From<Appointment> for AppointmentView {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.value(),
            date: appointment.date.to_string(),
            time: appointment.time.to_string(),
            pet_id: appointment.pet_id.value(),
            vet_id: appointment.vet_id.value(),
            description: appointment.description,
        }
    }
}

#[derive(Tabled)]
struct AuditView {
    id: i32,
    #[tabled(rename = "appointment")]
    appointment_id: i32,
    date: String,
    time: String,
    #[tabled(rename = "pet")]
    pet_id: i32,
    #[tabled(rename = "vet")]
    vet_id: i32,
    description: String,
    #[tabled(rename = "recorded at")]
    recorded_at: String,
}

impl From<AppointmentAudit> for AuditView {
    fn from(audit: AppointmentAudit) -> Self {
        Self {
            id: audit.audit_id,
            appointment_id: audit.appointment_id.value(),
            date: audit.date.to_string(),
            time: audit.time.to_string(),
            pet_id: audit.pet_id.value(),
            vet_id: audit.vet_id.value(),
            description: audit.description,
            recorded_at: audit.recorded_at.to_string(),
        }
    }
}

pub fn handle(cmd: &AppointmentCommand, pool: &DbPool) -> Result<()> {
    let store = SqliteAppointmentStore::new(pool.clone());
    match cmd {
        AppointmentCommand::Add(args) => {
            let appointment = store.create(&NewAppointment {
                date: args.date,
                time: args.time,
                pet_id: PetId::new(args.pet_id),
                vet_id: VetId::new(args.vet_id),
                description: args.description.clone(),
            })?;
            output::ok(&format!(
                "Booked appointment {} on {} at {}",
                appointment.id, appointment.date, appointment.time
            ));
        }
        AppointmentCommand::List => {
            let appointments = store.list()?;
            if appointments.is_empty() {
                output::note("No appointments booked.");
            } else {
                let rows: Vec<AppointmentView> =
                    appointments.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        AppointmentCommand::Remove(args) => {
            if store.delete(AppointmentId::new(args.id))? {
                output::ok(&format!("Cancelled appointment {}", args.id));
            } else {
                output::note("No appointment with that id.");
            }
        }
        AppointmentCommand::Audit => {
            let entries = store.list_audit()?;
            if entries.is_empty() {
                output::note("Audit log is empty.");
            } else {
                let rows: Vec<AuditView> = entries.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
    }
    Ok(())
}
