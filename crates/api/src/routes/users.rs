//! User route handlers: registration and login.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::models::User;
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Register a new user.
///
/// POST /api/users/register
///
/// Returns 201 with the created user. The password hash never appears in the
/// response body.
///
/// # Errors
///
/// Returns `ApiError` if the email is invalid, the password is empty, or the
/// email is already registered.
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let auth = AuthService::new(state.pool(), &state.config().jwt_secret);

    let user = auth.register(&req.name, &req.email, &req.password).await?;
    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Login with email and password.
///
/// POST /api/users/login
///
/// Returns 200 with a signed token valid for one hour.
///
/// # Errors
///
/// Returns `ApiError` if the email is unknown or the password is wrong.
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let auth = AuthService::new(state.pool(), &state.config().jwt_secret);

    let token = auth.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse { token }))
}
