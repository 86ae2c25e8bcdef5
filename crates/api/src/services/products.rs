//! Product service.
//!
//! Pass-through CRUD orchestration over the product repository.

use sqlx::PgPool;

use shoplite_core::ProductId;

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;
use crate::models::{NewProduct, Product};

/// Product service.
pub struct ProductService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> ProductService<'a> {
    /// Create a new product service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// Create a product and return the created row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, fields: &NewProduct) -> Result<Product, RepositoryError> {
        self.products.create(fields).await
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.products.list().await
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn get(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.products.get(id).await
    }

    /// Overwrite all mutable fields of a product by ID and return the updated row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn update(
        &self,
        id: ProductId,
        fields: &NewProduct,
    ) -> Result<Product, RepositoryError> {
        self.products.update(id, fields).await
    }

    /// Delete a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.products.delete(id).await
    }
}
