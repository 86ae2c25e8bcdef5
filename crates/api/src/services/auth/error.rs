//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] shoplite_core::EmailError),

    /// No account registered under the supplied email.
    #[error("email not found")]
    EmailNotFound,

    /// Password did not match the stored hash.
    #[error("incorrect password")]
    WrongPassword,

    /// Email is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// Password field was missing or empty.
    #[error("password cannot be empty")]
    MissingPassword,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Token signing error.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}
