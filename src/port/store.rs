//! Persistence ports for the clinic entities.
//!
//! One trait per aggregate. Every trait follows the same contract: `create`
//! persists one row and returns it with its engine-assigned key, `list`
//! returns the full table in storage order, and `delete` removes at most one
//! row, returning `false` when nothing matched. Junction rows (sale lines,
//! treatment assignments) carry their composite key through the caller.

use crate::domain::appointment::{Appointment, AppointmentAudit, NewAppointment};
use crate::domain::client::{Client, NewClient};
use crate::domain::id::{AppointmentId, ClientId, PetId, ProductId, SaleId, TreatmentId, VetId};
use crate::domain::pet::{NewPet, Pet};
use crate::domain::product::{NewProduct, Product};
use crate::domain::sale::{NewSale, Sale, SaleLine};
use crate::domain::treatment::{AppointmentTreatment, NewTreatment, Treatment};
use crate::domain::vet::{NewVeterinarian, Veterinarian};
use crate::error::Result;

/// Storage operations for clients.
pub trait ClientStore: Send + Sync {
    /// Persist a client, returning it with its assigned key.
    fn create(&self, client: &NewClient) -> Result<Client>;

    /// List all clients in storage order.
    fn list(&self) -> Result<Vec<Client>>;

    /// Delete the client with the given email. Returns `false` if none matched.
    fn delete_by_email(&self, email: &str) -> Result<bool>;
}

/// Storage operations for pets.
pub trait PetStore: Send + Sync {
    fn create(&self, pet: &NewPet) -> Result<Pet>;

    fn list(&self) -> Result<Vec<Pet>>;

    /// Delete a pet by id. Returns `false` if none matched.
    fn delete(&self, id: PetId) -> Result<bool>;
}

/// Storage operations for veterinarians.
pub trait VetStore: Send + Sync {
    fn create(&self, vet: &NewVeterinarian) -> Result<Veterinarian>;

    fn list(&self) -> Result<Vec<Veterinarian>>;

    /// Delete the veterinarian with the given email. Returns `false` if none matched.
    fn delete_by_email(&self, email: &str) -> Result<bool>;
}

/// Storage operations for appointments and their audit log.
pub trait AppointmentStore: Send + Sync {
    /// Persist an appointment and snapshot it into the audit log in the
    /// same transaction.
    fn create(&self, appointment: &NewAppointment) -> Result<Appointment>;

    fn list(&self) -> Result<Vec<Appointment>>;

    /// Delete an appointment by id. Returns `false` if none matched.
    fn delete(&self, id: AppointmentId) -> Result<bool>;

    /// List the audit log in storage order. The log is append-only; no
    /// update or delete is exposed.
    fn list_audit(&self) -> Result<Vec<AppointmentAudit>>;
}

/// Storage operations for products.
pub trait ProductStore: Send + Sync {
    fn create(&self, product: &NewProduct) -> Result<Product>;

    fn list(&self) -> Result<Vec<Product>>;

    fn delete(&self, id: ProductId) -> Result<bool>;
}

/// Storage operations for sales and their line items.
pub trait SaleStore: Send + Sync {
    fn create(&self, sale: &NewSale) -> Result<Sale>;

    fn list(&self) -> Result<Vec<Sale>>;

    fn delete(&self, id: SaleId) -> Result<bool>;

    /// Persist a sale line. A duplicate (sale, product) pair is rejected by
    /// the composite key.
    fn add_line(&self, line: &SaleLine) -> Result<()>;

    /// List all sale lines in storage order.
    fn list_lines(&self) -> Result<Vec<SaleLine>>;

    /// Delete one sale line by its composite key. Returns `false` if none matched.
    fn delete_line(&self, sale_id: SaleId, product_id: ProductId) -> Result<bool>;
}

/// Storage operations for treatments and their appointment assignments.
pub trait TreatmentStore: Send + Sync {
    fn create(&self, treatment: &NewTreatment) -> Result<Treatment>;

    fn list(&self) -> Result<Vec<Treatment>>;

    fn delete(&self, id: TreatmentId) -> Result<bool>;

    /// Assign a treatment to an appointment. A duplicate pair is rejected
    /// by the composite key.
    fn assign(&self, assignment: &AppointmentTreatment) -> Result<()>;

    /// List all assignments in storage order.
    fn list_assignments(&self) -> Result<Vec<AppointmentTreatment>>;

    /// Remove one assignment by its composite key. Returns `false` if none matched.
    fn unassign(&self, appointment_id: AppointmentId, treatment_id: TreatmentId) -> Result<bool>;
}
