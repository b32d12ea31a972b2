//! `vetclinic client` handlers.

use tabled::{Table, Tabled};

use crate::adapter::sqlite::database::connection::DbPool;
use crate::adapter::sqlite::SqliteClientStore;
use crate::cli::{output, ClientCommand};
use crate::domain::client::{Client, NewClient};
use crate::error::Result;
use crate::port::store::ClientStore;

#[derive(Tabled)]
struct ClientView {
    id: i32,
    name: String,
    surname: String,
    address: String,
    phone: String,
    email: String,
}

impl From<Client> for ClientView {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.value(),
            name: client.name,
            surname: client.surname,
            address: client.address,
            phone: client.phone,
            email: client.email,
        }
    }
}

pub fn handle(cmd: &ClientCommand, pool: &DbPool) -> Result<()> {
    let store = SqliteClientStore::new(pool.clone());
    match cmd {
        ClientCommand::Add(args) => {
            let client = store.create(&NewClient {
                name: args.name.clone(),
                surname: args.surname.clone(),
                address: args.address.clone(),
                phone: args.phone.clone(),
                email: args.email.clone(),
            })?;
            output::ok(&format!(
                "Registered client {} ({} {})",
                client.id, client.name, client.surname
            ));
        }
        ClientCommand::List => {
            let clients = store.list()?;
            if clients.is_empty() {
                output::note("No clients registered.");
            } else {
                let rows: Vec<ClientView> = clients.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        ClientCommand::Remove(args) => {
            if store.delete_by_email(&args.email)? {
                output::ok(&format!("Removed client {}", args.email));
            } else {
                output::note("No client with that email.");
            }
        }
    }
    Ok(())
}
