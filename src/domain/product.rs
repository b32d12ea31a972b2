//! Products sold over the counter.

use rust_decimal::Decimal;

use super::id::ProductId;

/// A persisted product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
}

/// Fields for a product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
}
