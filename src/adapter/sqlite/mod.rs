//! SQLite adapters for the storage ports.

pub mod appointment;
pub mod client;
pub mod database;
pub mod pet;
pub mod product;
pub mod sale;
pub mod treatment;
pub mod vet;

pub use appointment::SqliteAppointmentStore;
pub use client::SqliteClientStore;
pub use pet::SqlitePetStore;
pub use product::SqliteProductStore;
pub use sale::SqliteSaleStore;
pub use treatment::SqliteTreatmentStore;
pub use vet::SqliteVetStore;
