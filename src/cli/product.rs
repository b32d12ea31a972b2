//! `vetclinic product` handlers.

use tabled::{Table, Tabled};

use crate::adapter::sqlite::database::connection::DbPool;
use crate::adapter::sqlite::SqliteProductStore;
use crate::cli::{output, ProductCommand};
use crate::domain::id::ProductId;
use crate::domain::product::{NewProduct, Product};
use crate::error::Result;
use crate::port::store::ProductStore;

#[derive(Tabled)]
struct ProductView {
    id: i32,
    name: String,
    description: String,
    #[tabled(rename = "unit price")]
    unit_price: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            unit_price: product.unit_price.to_string(),
        }
    }
}

pub fn handle(cmd: &ProductCommand, pool: &DbPool) -> Result<()> {
    let store = SqliteProductStore::new(pool.clone());
    match cmd {
        ProductCommand::Add(args) => {
            let product = store.create(&NewProduct {
                name: args.name.clone(),
                description: args.description.clone(),
                unit_price: args.unit_price,
            })?;
            output::ok(&format!("Added product {} ({})", product.id, product.name));
        }
        ProductCommand::List => {
            let products = store.list()?;
            if products.is_empty() {
                output::note("No products in the catalogue.");
            } else {
                let rows: Vec<ProductView> = products.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        ProductCommand::Remove(args) => {
            if store.delete(ProductId::new(args.id))? {
                output::ok(&format!("Removed product {}", args.id));
            } else {
                output::note("No product with that id.");
            }
        }
    }
    Ok(())
}
