//! `vetclinic sale` handlers.

use tabled::{Table, Tabled};

use crate::adapter::sqlite::database::connection::DbPool;
use crate::adapter::sqlite::SqliteSaleStore;
use crate::cli::{output, SaleCommand};
use crate::domain::id::{ClientId, ProductId, SaleId};
use crate::domain::sale::{NewSale, Sale, SaleLine};
use crate::error::Result;
use crate::port::store::SaleStore;

#[derive(Tabled)]
struct SaleView {
    id: i32,
    date: String,
    #[tabled(rename = "client")]
    client_id: i32,
    total: String,
}

impl From<Sale> for SaleView {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id.value(),
            date: sale.date.to_string(),
            client_id: sale.client_id.value(),
            total: sale.total.to_string(),
        }
    }
}

#[derive(Tabled)]
struct SaleLineView {
    #[tabled(rename = "sale")]
    sale_id: i32,
    #[tabled(rename = "product")]
    product_id: i32,
    quantity: i32,
    #[tabled(rename = "unit price")]
    unit_price: String,
}

impl From<SaleLine> for SaleLineView {
    fn from(line: SaleLine) -> Self {
        Self {
            sale_id: line.sale_id.value(),
            product_id: line.product_id.value(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
        }
    }
}

pub fn handle(cmd: &SaleCommand, pool: &DbPool) -> Result<()> {
    let store = SqliteSaleStore::new(pool.clone());
    match cmd {
        SaleCommand::Add(args) => {
            let sale = store.create(&NewSale {
                date: args.date,
                client_id: ClientId::new(args.client_id),
                total: args.total,
            })?;
            output::ok(&format!("Recorded sale {} (total {})", sale.id, sale.total));
        }
        SaleCommand::List => {
            let sales = store.list()?;
            if sales.is_empty() {
                output::note("No sales recorded.");
            } else {
                let rows: Vec<SaleView> = sales.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        SaleCommand::Remove(args) => {
            if store.delete(SaleId::new(args.id))? {
                output::ok(&format!("Removed sale {}", args.id));
            } else {
                output::note("No sale with that id.");
            }
        }
        SaleCommand::AddLine(args) => {
            store.add_line(&SaleLine {
                sale_id: SaleId::new(args.sale_id),
                product_id: ProductId::new(args.product_id),
                quantity: args.quantity,
                unit_price: args.unit_price,
            })?;
            output::ok(&format!(
                "Added line (sale {}, product {})",
                args.sale_id, args.product_id
            ));
        }
        SaleCommand::Lines => {
            let lines = store.list_lines()?;
            if lines.is_empty() {
                output::note("No sale lines recorded.");
            } else {
                let rows: Vec<SaleLineView> = lines.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows));
            }
        }
        SaleCommand::RemoveLine(args) => {
            if store.delete_line(SaleId::new(args.sale_id), ProductId::new(args.product_id))? {
                output::ok(&format!(
                    "Removed line (sale {}, product {})",
                    args.sale_id, args.product_id
                ));
            } else {
                output::note("No line with that (sale, product) pair.");
            }
        }
    }
    Ok(())
}
