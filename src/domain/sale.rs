//! Sales and their per-product line items.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::id::{ClientId, ProductId, SaleId};

/// A persisted sale header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub id: SaleId,
    pub date: NaiveDate,
    pub client_id: ClientId,
    pub total: Decimal,
}

/// Fields for a sale that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub date: NaiveDate,
    pub client_id: ClientId,
    pub total: Decimal,
}

/// One line of a sale, keyed by (sale, product).
///
/// The composite key is the whole identity: the caller supplies it on
/// create, and a second line for the same pair is rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleLine {
    pub sale_id: SaleId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: Decimal,
}
