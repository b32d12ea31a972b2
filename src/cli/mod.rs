//! Command-line interface definitions.
//!
//! One subcommand family per clinic entity, mirroring the one-tab-per-entity
//! layout of the desktop front-end this tool replaces. Each invocation is a
//! single unit of work: open the pool, run one operation, print, exit.

pub mod appointment;
pub mod check;
pub mod client;
pub mod output;
pub mod pet;
pub mod product;
pub mod sale;
pub mod treatment;
pub mod vet;

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::adapter::sqlite::database::connection::{create_pool, run_migrations};
use crate::config::Config;
use crate::error::Result;

/// Vetclinic - records manager for a veterinary clinic.
#[derive(Parser, Debug)]
#[command(name = "vetclinic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage client records
    #[command(subcommand)]
    Client(ClientCommand),

    /// Manage pet records
    #[command(subcommand)]
    Pet(PetCommand),

    /// Manage veterinarian records
    #[command(subcommand)]
    Vet(VetCommand),

    /// Manage appointments and their audit log
    #[command(subcommand)]
    Appointment(AppointmentCommand),

    /// Manage the product catalogue
    #[command(subcommand)]
    Product(ProductCommand),

    /// Manage sales and their line items
    #[command(subcommand)]
    Sale(SaleCommand),

    /// Manage treatments and their appointment assignments
    #[command(subcommand)]
    Treatment(TreatmentCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `vetclinic client`
#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Register a new client
    Add(ClientAddArgs),
    /// List all clients
    List,
    /// Remove a client by email
    Remove(EmailArg),
}

#[derive(Parser, Debug)]
pub struct ClientAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub surname: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub phone: String,
    /// Unique across clients
    #[arg(long)]
    pub email: String,
}

/// Shared argument for commands that delete by unique email.
#[derive(Parser, Debug)]
pub struct EmailArg {
    #[arg(long)]
    pub email: String,
}

/// Subcommands for `vetclinic pet`
#[derive(Subcommand, Debug)]
pub enum PetCommand {
    /// Register a new pet
    Add(PetAddArgs),
    /// List all pets
    List,
    /// Remove a pet by id
    Remove(IdArg),
}

#[derive(Parser, Debug)]
pub struct PetAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub species: String,
    #[arg(long)]
    pub breed: String,
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: NaiveDate,
    /// Owning client id
    #[arg(long)]
    pub client_id: i32,
}

/// Subcommands for `vetclinic vet`
#[derive(Subcommand, Debug)]
pub enum VetCommand {
    /// Register a new veterinarian
    Add(VetAddArgs),
    /// List all veterinarians
    List,
    /// Remove a veterinarian by email
    Remove(EmailArg),
}

#[derive(Parser, Debug)]
pub struct VetAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub surname: String,
    #[arg(long)]
    pub specialty: String,
    #[arg(long)]
    pub phone: String,
    /// Unique across veterinarians
    #[arg(long)]
    pub email: String,
}

/// Subcommands for `vetclinic appointment`
#[derive(Subcommand, Debug)]
pub enum AppointmentCommand {
    /// Book an appointment (also writes the audit log)
    Add(AppointmentAddArgs),
    /// List all appointments
    List,
    /// Cancel an appointment by id
    Remove(IdArg),
    /// Show the appointment audit log
    Audit,
}

#[derive(Parser, Debug)]
pub struct AppointmentAddArgs {
    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    /// Appointment time (HH:MM:SS)
    #[arg(long)]
    pub time: NaiveTime,
    #[arg(long)]
    pub pet_id: i32,
    #[arg(long)]
    pub vet_id: i32,
    #[arg(long, default_value = "")]
    pub description: String,
}

/// Subcommands for `vetclinic product`
#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// Add a product to the catalogue
    Add(ProductAddArgs),
    /// List all products
    List,
    /// Remove a product by id
    Remove(IdArg),
}

#[derive(Parser, Debug)]
pub struct ProductAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Unit price, e.g. 12.99
    #[arg(long)]
    pub unit_price: Decimal,
}

/// Subcommands for `vetclinic sale`
#[derive(Subcommand, Debug)]
pub enum SaleCommand {
    /// Record a sale header
    Add(SaleAddArgs),
    /// List all sales
    List,
    /// Remove a sale by id
    Remove(IdArg),
    /// Add a line item to a sale
    AddLine(SaleLineArgs),
    /// List all sale lines
    Lines,
    /// Remove a line item by (sale, product) pair
    RemoveLine(SaleLineKeyArgs),
}

#[derive(Parser, Debug)]
pub struct SaleAddArgs {
    /// Sale date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long)]
    pub client_id: i32,
    /// Sale total, e.g. 25.98
    #[arg(long)]
    pub total: Decimal,
}

#[derive(Parser, Debug)]
pub struct SaleLineArgs {
    #[arg(long)]
    pub sale_id: i32,
    #[arg(long)]
    pub product_id: i32,
    #[arg(long)]
    pub quantity: i32,
    /// Unit price at time of sale
    #[arg(long)]
    pub unit_price: Decimal,
}

#[derive(Parser, Debug)]
pub struct SaleLineKeyArgs {
    #[arg(long)]
    pub sale_id: i32,
    #[arg(long)]
    pub product_id: i32,
}

/// Subcommands for `vetclinic treatment`
#[derive(Subcommand, Debug)]
pub enum TreatmentCommand {
    /// Add a treatment to the catalogue
    Add(TreatmentAddArgs),
    /// List all treatments
    List,
    /// Remove a treatment by id
    Remove(IdArg),
    /// Prescribe a treatment for an appointment
    Assign(AssignArgs),
    /// List all prescriptions
    Assignments,
    /// Remove a prescription by (appointment, treatment) pair
    Unassign(AssignKeyArgs),
}

#[derive(Parser, Debug)]
pub struct TreatmentAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Parser, Debug)]
pub struct AssignArgs {
    #[arg(long)]
    pub appointment_id: i32,
    #[arg(long)]
    pub treatment_id: i32,
    #[arg(long)]
    pub dosage: String,
    /// Duration in days
    #[arg(long)]
    pub duration: i32,
}

#[derive(Parser, Debug)]
pub struct AssignKeyArgs {
    #[arg(long)]
    pub appointment_id: i32,
    #[arg(long)]
    pub treatment_id: i32,
}

/// Subcommands for `vetclinic check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Probe database connectivity
    Db,
}

/// Shared argument for commands that delete by numeric id.
#[derive(Parser, Debug)]
pub struct IdArg {
    #[arg(long)]
    pub id: i32,
}

/// Dispatch a parsed command.
///
/// Opens the pool, runs pending migrations so the tables exist, and hands
/// off to the entity handler.
///
/// # Errors
/// Returns any storage or configuration error from the handler.
pub fn run(command: Commands, config: &Config) -> Result<()> {
    if let Commands::Check(cmd) = &command {
        return check::handle(cmd, config);
    }

    let pool = create_pool(&config.database.url)?;
    run_migrations(&pool)?;

    match command {
        Commands::Client(cmd) => client::handle(&cmd, &pool),
        Commands::Pet(cmd) => pet::handle(&cmd, &pool),
        Commands::Vet(cmd) => vet::handle(&cmd, &pool),
        Commands::Appointment(cmd) => appointment::handle(&cmd, &pool),
        Commands::Product(cmd) => product::handle(&cmd, &pool),
        Commands::Sale(cmd) => sale::handle(&cmd, &pool),
        Commands::Treatment(cmd) => treatment::handle(&cmd, &pool),
        Commands::Check(_) => unreachable!("handled above"),
    }
}
