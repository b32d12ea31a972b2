//! Pet records, each owned by one client.

use chrono::NaiveDate;

use super::id::{ClientId, PetId};

/// A persisted pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub client_id: ClientId,
}

/// Fields for a pet that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub client_id: ClientId,
}
