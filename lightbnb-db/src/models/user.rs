//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record from database
///
/// `password` holds whatever the web layer stored, normally a bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields for registering a user; `id` is generated by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
