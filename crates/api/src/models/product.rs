//! Product model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shoplite_core::{CategoryId, ProductId};

/// A catalog product.
///
/// `category_id` references a category; referential integrity is the store's
/// job and is not checked in-process.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: CategoryId,
    pub image_url: String,
}

/// Fields for creating or overwriting a product.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: CategoryId,
    pub image_url: String,
}
