//! Client records: the people who bring pets to the clinic.

use super::id::ClientId;

/// A persisted client with its engine-assigned key.
///
/// Emails are unique across clients; the original front-end used them as the
/// delete criterion and this crate keeps that contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub surname: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Fields for a client that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}
