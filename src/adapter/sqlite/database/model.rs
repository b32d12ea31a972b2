//! Database row types for Diesel ORM.
//!
//! Queryable rows carry the engine-assigned key; the `New*` variants omit it
//! so SQLite assigns one on insert. Money columns travel as text and are
//! parsed into `Decimal` at the store boundary.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use super::schema::{
    appointment_audit, appointment_treatments, appointments, clients, pets, products, sale_lines,
    sales, treatments, veterinarians,
};

/// Database row for a client (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClientRow {
    pub client_id: i32,
    pub name: String,
    pub surname: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Database row for a client (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = clients)]
pub struct NewClientRow {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Database row for a pet (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = pets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PetRow {
    pub pet_id: i32,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub client_id: i32,
}

/// Database row for a pet (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = pets)]
pub struct NewPetRow {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub client_id: i32,
}

/// Database row for a veterinarian (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = veterinarians)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VetRow {
    pub vet_id: i32,
    pub name: String,
    pub surname: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
}

/// Database row for a veterinarian (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = veterinarians)]
pub struct NewVetRow {
    pub name: String,
    pub surname: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
}

/// Database row for an appointment (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppointmentRow {
    pub appointment_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pet_id: i32,
    pub vet_id: i32,
    pub description: String,
}

/// Database row for an appointment (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = appointments)]
pub struct NewAppointmentRow {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pet_id: i32,
    pub vet_id: i32,
    pub description: String,
}

/// Database row for an audit log entry (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = appointment_audit)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AuditRow {
    pub audit_id: i32,
    pub appointment_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pet_id: i32,
    pub vet_id: i32,
    pub description: String,
    pub recorded_at: NaiveDateTime,
}

/// Database row for an audit log entry (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = appointment_audit)]
pub struct NewAuditRow {
    pub appointment_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pet_id: i32,
    pub vet_id: i32,
    pub description: String,
    pub recorded_at: NaiveDateTime,
}

/// Database row for a product (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub unit_price: String,
}

/// Database row for a product (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub name: String,
    pub description: String,
    pub unit_price: String,
}

/// Database row for a sale header (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = sales)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SaleRow {
    pub sale_id: i32,
    pub date: NaiveDate,
    pub client_id: i32,
    pub total: String,
}

/// Database row for a sale header (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = sales)]
pub struct NewSaleRow {
    pub date: NaiveDate,
    pub client_id: i32,
    pub total: String,
}

/// Database row for a sale line. The caller supplies the whole composite
/// key, so one struct serves both directions.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = sale_lines)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SaleLineRow {
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: String,
}

/// Database row for a treatment (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = treatments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TreatmentRow {
    pub treatment_id: i32,
    pub name: String,
    pub description: String,
}

/// Database row for a treatment (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = treatments)]
pub struct NewTreatmentRow {
    pub name: String,
    pub description: String,
}

/// Database row for a treatment assignment, composite-keyed like
/// [`SaleLineRow`].
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = appointment_treatments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppointmentTreatmentRow {
    pub appointment_id: i32,
    pub treatment_id: i32,
    pub dosage: String,
    pub duration: i32,
}
