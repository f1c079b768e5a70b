//! User repository
//!
//! Lookups by unique key return `Ok(None)` when nothing matches. Inserting a
//! duplicate email surfaces the unique violation as an error; see
//! [`DbError::is_unique_violation`](crate::DbError::is_unique_violation).

use sqlx::PgPool;

use super::log_failure;
use crate::error::DbError;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(log_failure("get_user_with_email"))
    }

    /// Get a single user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(log_failure("get_user_with_id"))
    }

    /// Insert a user, returning the stored row with its generated id.
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .map_err(log_failure("add_user"))
    }
}
