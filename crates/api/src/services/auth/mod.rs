//! Authentication service.
//!
//! Handles user registration and login. Passwords are hashed exactly once,
//! here in the service layer, with Argon2id; login issues a signed JWT
//! carrying the user id with a fixed one-hour expiry.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use jsonwebtoken::{EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use shoplite_core::{Email, UserId};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// Token lifetime in seconds.
const TOKEN_TTL_SECS: u64 = 3600;

/// JWT claims carried by a login token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Expiry (seconds since epoch).
    pub exp: u64,
    /// Issued-at (seconds since epoch).
    pub iat: u64,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    jwt_secret: &'a SecretString,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, jwt_secret: &'a SecretString) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt_secret,
        }
    }

    /// Register a new user with name, email, and password.
    ///
    /// The returned [`User`] never carries the password hash.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::MissingPassword` if the password is empty.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(name, &email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with email and password, returning a signed token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailNotFound` if no account has this email.
    /// Returns `AuthError::WrongPassword` if the password doesn't match.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let email = Email::parse(email)?;

        let (user, password_hash) = self
            .users
            .get_password_hash(&email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        verify_password(password, &password_hash)?;

        issue_token(user.id, self.jwt_secret)
    }
}

/// Hash a password using Argon2id with a random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::WrongPassword)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::WrongPassword)
}

/// Sign a token encoding the user's id with a fixed one-hour expiry.
fn issue_token(user_id: UserId, secret: &SecretString) -> Result<String, AuthError> {
    let now = jsonwebtoken::get_current_timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )?;

    Ok(token)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation};

    use super::*;

    #[test]
    fn test_hash_verify_roundtrip() {
        let hash = hash_password("password123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("password123", &hash).is_ok());
    }

    #[test]
    fn test_verify_wrong_password() {
        let hash = hash_password("password123").unwrap();
        assert!(matches!(
            verify_password("hunter2", &hash),
            Err(AuthError::WrongPassword)
        ));
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_password("password123").unwrap();
        let b = hash_password("password123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_garbage_hash() {
        assert!(matches!(
            verify_password("password123", "not-a-phc-string"),
            Err(AuthError::WrongPassword)
        ));
    }

    #[test]
    fn test_issue_token_claims() {
        let secret = SecretString::from("test-secret-long-enough-for-tests!!");
        let token = issue_token(UserId::new(42), &secret).unwrap();
        assert!(!token.is_empty());

        let decoded = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret("test-secret-long-enough-for-tests!!".as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, "42");
        assert_eq!(decoded.claims.exp - decoded.claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let secret = SecretString::from("test-secret-long-enough-for-tests!!");
        let token = issue_token(UserId::new(1), &secret).unwrap();

        let result = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"a-completely-different-secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
