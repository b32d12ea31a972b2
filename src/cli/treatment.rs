//! `vetclinic treatment` handlers.

use tabled::{Table, Tabled};

use crate::adapter::sqlite::database::connection::DbPool;
use crate::adapter::sqlite::SqliteTreatmentStore;
use crate::cli::{output, TreatmentCommand};
use crate::domain::id::{AppointmentId, TreatmentId};
use crate::domain::treatment::{AppointmentTreatment, NewTreatment, Treatment};
use crate::error::Result;
use crate::port::store::TreatmentStore;

#[derive(Tabled)]
struct TreatmentView {
    id: i32,
    name: String,
    description: String,
}

impl From<Treatment> for TreatmentView {
    fn from(treatment: Treatment) -> Self {
        Self {
            id: treatment.id.value(),
            name: treatment.name,
            description: treatment.description,
        }
    }
}

#[derive(Tabled)]
struct AssignmentView {
    #[tabled(rename = "appointment")]
    appointment_id: i32,
    #[tabled(rename = "treatment")]
    treatment_id: i32,
    dosage: String,
    #[tabled(rename = "days")]
    duration: i32,
}

impl From<AppointmentTreatment> for AssignmentView {
    fn from(assignment: AppointmentTreatment) -> Self {
        Self {
            appointment_id: assignment.appointment_id.value(),
            treatment_id: assignment.treatment_id.value(),
            dosage: assignment.dosage,
            duration: assignment.duration,
        }
    }
}

pub fn handle(cmd: &TreatmentCommand, pool: &DbPool) -> Result<()> {
    let store = SqliteTreatmentStore::new(pool.clone());
    match cmd {
        TreatmentCommand::Add(args) => {
            let treatment = store.create(&NewTreatment {
                name: args.name.clone(),
                description: args.description.clone(),
            })?;
            output::ok(&format!(
                "Added treatment {} ({})",
                treatment.id, treatment.name
            ));
        }
        TreatmentCommand::List => {
            let treatments = store.list()?;
            if treatments.is_empty() {
                output::note("No treatments in the catalogue.");
            } else {
                let rows: Vec<TreatmentView> = treatments.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        TreatmentCommand::Remove(args) => {
            if store.delete(TreatmentId::new(args.id))? {
                output::ok(&format!("Removed treatment {}", args.id));
            } else {
                output::note("No treatment with that id.");
            }
        }
        TreatmentCommand::Assign(args) => {
            store.assign(&AppointmentTreatment {
                appointment_id: AppointmentId::new(args.appointment_id),
                treatment_id: TreatmentId::new(args.treatment_id),
                dosage: args.dosage.clone(),
                duration: args.duration,
            })?;
            output::ok(&format!(
                "Prescribed treatment {} for appointment {}",
                args.treatment_id, args.appointment_id
            ));
        }
        TreatmentCommand::Assignments => {
            let assignments = store.list_assignments()?;
            if assignments.is_empty() {
                output::note("No prescriptions recorded.");
            } else {
                let rows: Vec<AssignmentView> =
                    assignments.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        TreatmentCommand::Unassign(args) => {
            if store.unassign(
                AppointmentId::new(args.appointment_id),
                TreatmentId::new(args.treatment_id),
            )? {
                output::ok(&format!(
                    "Removed prescription (appointment {}, treatment {})",
                    args.appointment_id, args.treatment_id
                ));
            } else {
                output::note("No prescription with that pair.");
            }
        }
    }
    Ok(())
}
