//! Row types for the LightBnB schema
//!
//! The schema itself (`users`, `properties`, `reservations`,
//! `property_reviews`) is owned by the database; these types only mirror the
//! columns this crate reads and writes.

pub mod property;
pub mod reservation;
pub mod search;
pub mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{Reservation, ReservationSummary};
pub use search::PropertySearch;
pub use user::{NewUser, User};
