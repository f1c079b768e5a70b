//! Reservation records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reservation record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub property_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// One row of a guest's reservation list, joined with the reserved property
/// and its average review rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ReservationSummary {
    pub id: i32,
    pub property_id: i32,
    pub title: String,
    /// Nightly cost in cents
    pub cost_per_night: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_rating: Option<f64>,
}
