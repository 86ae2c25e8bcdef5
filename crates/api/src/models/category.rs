//! Category model.

use serde::Serialize;
use sqlx::FromRow;

use shoplite_core::CategoryId;

/// A product category.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
