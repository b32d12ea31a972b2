//! `vetclinic pet` handlers.

use tabled::{Table, Tabled};

use crate::adapter::sqlite::database::connection::DbPool;
use crate::adapter::sqlite::SqlitePetStore;
use crate::cli::{output, PetCommand};
use crate::domain::id::{ClientId, PetId};
use crate::domain::pet::{NewPet, Pet};
use crate::error::Result;
use crate::port::store::PetStore;

#[derive(Tabled)]
struct PetView {
    id: i32,
    name: String,
    species: String,
    breed: String,
    #[tabled(rename = "birth date")]
    birth_date: String,
    #[tabled(rename = "client")]
    client_id: i32,
}

impl From<Pet> for PetView {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id.value(),
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            birth_date: pet.birth_date.to_string(),
            client_id: pet.client_id.value(),
        }
    }
}

pub fn handle(cmd: &PetCommand, pool: &DbPool) -> Result<()> {
    let store = SqlitePetStore::new(pool.clone());
    match cmd {
        PetCommand::Add(args) => {
            let pet = store.create(&NewPet {
                name: args.name.clone(),
                species: args.species.clone(),
                breed: args.breed.clone(),
                birth_date: args.birth_date,
                client_id: ClientId::new(args.client_id),
            })?;
            output::ok(&format!("Registered pet {} ({})", pet.id, pet.name));
        }
        PetCommand::List => {
            let pets = store.list()?;
            if pets.is_empty() {
                output::note("No pets registered.");
            } else {
                let rows: Vec<PetView> = pets.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        PetCommand::Remove(args) => {
            if store.delete(PetId::new(args.id))? {
                output::ok(&format!("Removed pet {}", args.id));
            } else {
                output::note("No pet with that id.");
            }
        }
    }
    Ok(())
}
