//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use shoplite_core::CategoryId;

use crate::error::Result;
use crate::models::Category;
use crate::services::CategoryService;
use crate::state::AppState;

/// Create/update request body.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Create a new category.
///
/// POST /api/categories
///
/// # Errors
///
/// Returns `ApiError` if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = CategoryService::new(state.pool()).create(&req.name).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories.
///
/// GET /api/categories
///
/// # Errors
///
/// Returns `ApiError` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryService::new(state.pool()).list().await?;

    Ok(Json(categories))
}

/// Get a category by ID.
///
/// GET /api/categories/{id}
///
/// # Errors
///
/// Returns `ApiError::NotFound` if the category doesn't exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Category>> {
    let category = CategoryService::new(state.pool()).get(id).await?;

    Ok(Json(category))
}

/// Update a category by ID.
///
/// PUT /api/categories/{id}
///
/// # Errors
///
/// Returns `ApiError::NotFound` if the category doesn't exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<Category>> {
    let category = CategoryService::new(state.pool())
        .update(id, &req.name)
        .await?;

    Ok(Json(category))
}

/// Delete a category by ID.
///
/// DELETE /api/categories/{id}
///
/// # Errors
///
/// Returns `ApiError::NotFound` if the category doesn't exist.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    CategoryService::new(state.pool()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
