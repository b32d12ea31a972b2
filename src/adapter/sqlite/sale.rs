//! SQLite sale store implementation.
//!
//! Covers sale headers and their composite-keyed line items. A sale and its
//! lines are separate units of work, as in the front-end this replaces.

use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::adapter::sqlite::database::connection::{last_insert_rowid, DbPool};
use crate::adapter::sqlite::database::model::{NewSaleRow, SaleLineRow, SaleRow};
use crate::adapter::sqlite::database::schema::{sale_lines, sales};
use crate::domain::id::{ClientId, ProductId, SaleId};
use crate::domain::sale::{NewSale, Sale, SaleLine};
use crate::error::{Error, Result};
use crate::port::store::SaleStore;

/// SQLite-backed sale store.
pub struct SqliteSaleStore {
    pool: DbPool,
}

impl SqliteSaleStore {
    /// Create a new sale store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn parse_money(text: &str) -> Result<Decimal> {
        text.parse()
            .map_err(|e: rust_decimal::Error| Error::Parse(e.to_string()))
    }

    fn from_row(row: SaleRow) -> Result<Sale> {
        Ok(Sale {
            id: SaleId::new(row.sale_id),
            date: row.date,
            client_id: ClientId::new(row.client_id),
            total: Self::parse_money(&row.total)?,
        })
    }

    fn line_from_row(row: SaleLineRow) -> Result<SaleLine> {
        Ok(SaleLine {
            sale_id: SaleId::new(row.sale_id),
            product_id: ProductId::new(row.product_id),
            quantity: row.quantity,
            unit_price: Self::parse_money(&row.unit_price)?,
        })
    }
}

impl SaleStore for SqliteSaleStore {
    fn create(&self, sale: &NewSale) -> Result<Sale> {
        let row = NewSaleRow {
            date: sale.date,
            client_id: sale.client_id.value(),
            total: sale.total.to_string(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(sales::table).values(&row).execute(conn)?;
                last_insert_rowid(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Sale {
            id: SaleId::new(id),
            date: sale.date,
            client_id: sale.client_id,
            total: sale.total,
        })
    }

    fn list(&self) -> Result<Vec<Sale>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<SaleRow> = sales::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    fn delete(&self, id: SaleId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(sales::table.find(id.value()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    fn add_line(&self, line: &SaleLine) -> Result<()> {
        let row = SaleLineRow {
            sale_id: line.sale_id.value(),
            product_id: line.product_id.value(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::insert_into(sale_lines::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    fn list_lines(&self) -> Result<Vec<SaleLine>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<SaleLineRow> = sale_lines::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::line_from_row).collect()
    }

    fn delete_line(&self, sale_id: SaleId, product_id: ProductId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted =
            diesel::delete(sale_lines::table.find((sale_id.value(), product_id.value())))
                .execute(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}
