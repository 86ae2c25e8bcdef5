//! Category service.
//!
//! Pass-through CRUD orchestration over the category repository; no business
//! rules beyond delegating to single statements.

use sqlx::PgPool;

use shoplite_core::CategoryId;

use crate::db::RepositoryError;
use crate::db::categories::CategoryRepository;
use crate::models::Category;

/// Category service.
pub struct CategoryService<'a> {
    categories: CategoryRepository<'a>,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            categories: CategoryRepository::new(pool),
        }
    }

    /// Create a category and return the created row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, name: &str) -> Result<Category, RepositoryError> {
        self.categories.create(name).await
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        self.categories.list().await
    }

    /// Get a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category doesn't exist.
    pub async fn get(&self, id: CategoryId) -> Result<Category, RepositoryError> {
        self.categories.get(id).await
    }

    /// Overwrite a category's name by ID and return the updated row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category doesn't exist.
    pub async fn update(&self, id: CategoryId, name: &str) -> Result<Category, RepositoryError> {
        self.categories.update(id, name).await
    }

    /// Delete a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category doesn't exist.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        self.categories.delete(id).await
    }
}
