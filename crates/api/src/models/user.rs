//! User model.

use serde::Serialize;

use shoplite_core::{Email, UserId};

/// A registered user.
///
/// The password hash is deliberately not part of this type; it only travels
/// through [`crate::db::users::UserRepository::get_password_hash`] during
/// login and never reaches a response body.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}
