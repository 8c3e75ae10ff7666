//! User domain entity.

use serde::Serialize;

/// Registered account.
///
/// The password hash is skipped on serialization so it can never leak
/// through a response body.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
