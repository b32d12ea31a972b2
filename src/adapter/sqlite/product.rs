//! SQLite product store implementation.

use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::adapter::sqlite::database::connection::{last_insert_rowid, DbPool};
use crate::adapter::sqlite::database::model::{NewProductRow, ProductRow};
use crate::adapter::sqlite::database::schema::products;
use crate::domain::id::ProductId;
use crate::domain::product::{NewProduct, Product};
use crate::error::{Error, Result};
use crate::port::store::ProductStore;

/// SQLite-backed product store. Prices travel as text and are parsed back
/// into [`Decimal`] on read.
pub struct SqliteProductStore {
    pool: DbPool,
}

impl SqliteProductStore {
    /// Create a new product store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: ProductRow) -> Result<Product> {
        let unit_price: Decimal = row
            .unit_price
            .parse()
            .map_err(|e: rust_decimal::Error| Error::Parse(e.to_string()))?;
        Ok(Product {
            id: ProductId::new(row.product_id),
            name: row.name,
            description: row.description,
            unit_price,
        })
    }
}

impl ProductStore for SqliteProductStore {
    fn create(&self, product: &NewProduct) -> Result<Product> {
        let row = NewProductRow {
            name: product.name.clone(),
            description: product.description.clone(),
            unit_price: product.unit_price.to_string(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(products::table)
                    .values(&row)
                    .execute(conn)?;
                last_insert_rowid(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Product {
            id: ProductId::new(id),
            name: row.name,
            description: row.description,
            unit_price: product.unit_price,
        })
    }

    fn list(&self) -> Result<Vec<Product>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<ProductRow> = products::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    fn delete(&self, id: ProductId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(products::table.find(id.value()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::sqlite::database::connection::{create_pool, run_migrations};
    use rust_decimal_macros::dec;

    fn setup_test_db() -> DbPool {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn price_round_trips_as_decimal() {
        let store = SqliteProductStore::new(setup_test_db());
        let created = store
            .create(&NewProduct {
                name: "Flea shampoo".into(),
                description: "250ml bottle".into(),
                unit_price: dec!(12.99),
            })
            .unwrap();

        let all = store.list().unwrap();
        assert_eq!(all, vec![created]);
        assert_eq!(all[0].unit_price, dec!(12.99));
    }

    #[test]
    fn delete_by_id_removes_the_row() {
        let store = SqliteProductStore::new(setup_test_db());
        let product = store
            .create(&NewProduct {
                name: "Kibble".into(),
                description: "10kg bag".into(),
                unit_price: dec!(35.00),
            })
            .unwrap();

        assert!(store.delete(product.id).unwrap());
        assert!(store.list().unwrap().is_empty());
        assert!(!store.delete(product.id).unwrap());
    }
}
