//! Vetclinic - records manager for a veterinary clinic.
//!
//! This crate persists the clinic's records (clients, pets, veterinarians,
//! appointments with an audit log, products, sales with line items, and
//! treatments with per-appointment prescriptions) in a relational store and
//! exposes row-level operations over them.
//!
//! # Architecture
//!
//! Storage is reached through per-aggregate traits so the SQLite adapter
//! stays swappable:
//!
//! - [`domain`] - Entity structs and typed integer identifiers
//! - [`port::store`] - Storage traits: create, list, delete per aggregate
//! - [`adapter::sqlite`] - Diesel/SQLite implementations with a pooled
//!   connection and embedded migrations
//! - [`cli`] - clap subcommand tree, one family per entity
//! - [`config`] - TOML configuration (database URL, logging)
//! - [`error`] - Error types for the crate
//!
//! Every operation is a synchronous unit of work: acquire a pooled
//! connection, run one statement (plus the audit insert for appointment
//! creation), release. Referential integrity is enforced by the engine, not
//! the application layer.
//!
//! # Example
//!
//! ```no_run
//! use vetclinic::adapter::sqlite::database::connection::{create_pool, run_migrations};
//! use vetclinic::adapter::sqlite::SqliteClientStore;
//! use vetclinic::domain::client::NewClient;
//! use vetclinic::port::store::ClientStore;
//!
//! let pool = create_pool("vetclinic.db").unwrap();
//! run_migrations(&pool).unwrap();
//!
//! let clients = SqliteClientStore::new(pool);
//! let client = clients
//!     .create(&NewClient {
//!         name: "Ana".into(),
//!         surname: "Reyes".into(),
//!         address: "12 Calle Mayor".into(),
//!         phone: "555-0101".into(),
//!         email: "ana@example.com".into(),
//!     })
//!     .unwrap();
//! println!("assigned key {}", client.id);
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
