//! Business-rule layer sitting between route handlers and repositories.

pub mod auth;
pub mod categories;
pub mod products;

pub use auth::{AuthError, AuthService};
pub use categories::CategoryService;
pub use products::ProductService;
