//! Database layer - connection pool, query builder and repositories
//!
//! # Design Principles
//!
//! - Pool is injected, never global
//! - One query per operation; averages come from a JOIN + GROUP BY
//! - Rely on DB constraints and surface violations; no check-then-insert
//! - Log failures, then return them unchanged

pub mod pool;
pub mod query;
pub mod repos;

pub use pool::create_pool;
pub use query::{BuiltQuery, Predicate, SelectQuery, SqlParam};
pub use repos::*;
