//! Veterinarian records.

use super::id::VetId;

/// A persisted veterinarian. Emails are unique, as with clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Veterinarian {
    pub id: VetId,
    pub name: String,
    pub surname: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
}

/// Fields for a veterinarian that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVeterinarian {
    pub name: String,
    pub surname: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
}
