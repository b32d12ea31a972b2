//! Clinic entity types, storage-agnostic.

pub mod appointment;
pub mod client;
pub mod id;
pub mod pet;
pub mod product;
pub mod sale;
pub mod treatment;
pub mod vet;
