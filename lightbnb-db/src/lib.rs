//! lightbnb-db: data access for the LightBnB rental app
//!
//! Wraps a PostgreSQL pool behind [`Database`], which exposes the six
//! operations the web layer consumes: user lookup by email or id, user
//! creation, reservation listing, property search, and property creation.
//!
//! The pool is always passed in. Nothing here holds process-wide state
//! except [`PropertyStore`], the JSON-seeded mock used for fixtures.

pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod mock;
pub mod models;

pub use config::{load_dotenv, DbConfig};
pub use db::pool::create_pool;
pub use db::query::{BuiltQuery, Predicate, SelectQuery, SqlParam};
pub use error::{DbError, Result};
pub use gateway::{Database, DEFAULT_LIMIT};
pub use mock::PropertyStore;
pub use models::{
    NewProperty, NewUser, Property, PropertyListing, PropertySearch, Reservation,
    ReservationSummary, User,
};
