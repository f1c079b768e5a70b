//! Repository implementations for database access
//!
//! Each repository borrows the pool and runs exactly one statement per call.
//! Failures are logged with the operation name and returned unchanged.

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::{build_search_query, PropertyRepo};
pub use reservations::ReservationRepo;
pub use users::UserRepo;

use tracing::error;

use crate::error::DbError;

/// Map a driver error into [`DbError`] after logging it.
pub(crate) fn log_failure(operation: &'static str) -> impl Fn(sqlx::Error) -> DbError {
    move |err| {
        error!(operation, error = %err, "query failed");
        DbError::from(err)
    }
}
