//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (database ping)
//!
//! # Users
//! POST /api/users/register      - Register a new user
//! POST /api/users/login         - Login, returns a signed token
//!
//! # Categories
//! POST   /api/categories        - Create category
//! GET    /api/categories        - List categories
//! GET    /api/categories/{id}   - Get category
//! PUT    /api/categories/{id}   - Update category
//! DELETE /api/categories/{id}   - Delete category
//!
//! # Products
//! POST   /api/products          - Create product
//! GET    /api/products          - List products
//! GET    /api/products/{id}     - Get product
//! PUT    /api/products/{id}     - Update product
//! DELETE /api/products/{id}     - Delete product
//! ```

pub mod categories;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(categories::create).get(categories::index))
        .route(
            "/{id}",
            get(categories::show)
                .put(categories::update)
                .delete(categories::destroy),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create).get(products::index))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/users", user_routes())
        .nest("/api/categories", category_routes())
        .nest("/api/products", product_routes())
}
