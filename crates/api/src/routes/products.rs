//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shoplite_core::ProductId;

use crate::error::Result;
use crate::models::{NewProduct, Product};
use crate::services::ProductService;
use crate::state::AppState;

/// Create a new product.
///
/// POST /api/products
///
/// # Errors
///
/// Returns `ApiError` if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = ProductService::new(state.pool()).create(&req).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products.
///
/// GET /api/products
///
/// # Errors
///
/// Returns `ApiError` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductService::new(state.pool()).list().await?;

    Ok(Json(products))
}

/// Get a product by ID.
///
/// GET /api/products/{id}
///
/// # Errors
///
/// Returns `ApiError::NotFound` if the product doesn't exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductService::new(state.pool()).get(id).await?;

    Ok(Json(product))
}

/// Update a product by ID, overwriting all mutable fields.
///
/// PUT /api/products/{id}
///
/// # Errors
///
/// Returns `ApiError::NotFound` if the product doesn't exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(req): Json<NewProduct>,
) -> Result<Json<Product>> {
    let product = ProductService::new(state.pool()).update(id, &req).await?;

    Ok(Json(product))
}

/// Delete a product by ID.
///
/// DELETE /api/products/{id}
///
/// # Errors
///
/// Returns `ApiError::NotFound` if the product doesn't exist.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    ProductService::new(state.pool()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
