//! `vetclinic vet` handlers.

use tabled::{Table, Tabled};

use crate::adapter::sqlite::database::connection::DbPool;
use crate::adapter::sqlite::SqliteVetStore;
use crate::cli::{output, VetCommand};
use crate::domain::vet::{NewVeterinarian, Veterinarian};
use crate::error::Result;
use crate::port::store::VetStore;

#[derive(Tabled)]
struct VetView {
    id: i32,
    name: String,
    surname: String,
    specialty: String,
    phone: String,
    email: String,
}

impl From<Veterinarian> for VetView {
    fn from(vet: Veterinarian) -> Self {
        Self {
            id: vet.id.value(),
            name: vet.name,
            surname: vet.surname,
            specialty: vet.specialty,
            phone: vet.phone,
            email: vet.email,
        }
    }
}

pub fn handle(cmd: &VetCommand, pool: &DbPool) -> Result<()> {
    let store = SqliteVetStore::new(pool.clone());
    match cmd {
        VetCommand::Add(args) => {
            let vet = store.create(&NewVeterinarian {
                name: args.name.clone(),
                surname: args.surname.clone(),
                specialty: args.specialty.clone(),
                phone: args.phone.clone(),
                email: args.email.clone(),
            })?;
            output::ok(&format!(
                "Registered veterinarian {} ({} {})",
                vet.id, vet.name, vet.surname
            ));
        }
        VetCommand::List => {
            let vets = store.list()?;
            if vets.is_empty() {
                output::note("No veterinarians registered.");
            } else {
                let rows: Vec<VetView> = vets.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        VetCommand::Remove(args) => {
            if store.delete_by_email(&args.email)? {
                output::ok(&format!("Removed veterinarian {}", args.email));
            } else {
                output::note("No veterinarian with that email.");
            }
        }
    }
    Ok(())
}
