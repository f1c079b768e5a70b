//! Query gateway consumed by the web layer

use sqlx::PgPool;
use tracing::instrument;

use crate::db::repos::{PropertyRepo, ReservationRepo, UserRepo};
use crate::error::Result;
use crate::models::{
    NewProperty, NewUser, Property, PropertyListing, PropertySearch, ReservationSummary, User,
};

/// Row cap used by listing operations when the caller has no preference.
pub const DEFAULT_LIMIT: u32 = 10;

/// Handle to the LightBnB database
///
/// Cheap to clone; clones share the underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(&self.pool)
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    /// Get a single user given their email. `None` when no user matches.
    #[instrument(skip(self, email))]
    pub async fn get_user_with_email(&self, email: &str) -> Result<Option<User>> {
        self.users().find_by_email(email).await
    }

    /// Get a single user given their id. `None` when no user matches.
    #[instrument(skip(self))]
    pub async fn get_user_with_id(&self, id: i32) -> Result<Option<User>> {
        self.users().find_by_id(id).await
    }

    /// Register a user. The password must already be hashed.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn add_user(&self, user: &NewUser) -> Result<User> {
        self.users().create(user).await
    }

    /// Reservations for `guest_id`, ordered by start date, at most `limit`.
    #[instrument(skip(self))]
    pub async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: u32,
    ) -> Result<Vec<ReservationSummary>> {
        self.reservations().list_for_guest(guest_id, limit).await
    }

    /// Properties matching `options`, cheapest first, at most `limit`.
    #[instrument(skip(self))]
    pub async fn get_all_properties(
        &self,
        options: &PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>> {
        self.properties().search(options, limit).await
    }

    /// Insert a property and return it with its generated id.
    #[instrument(skip(self, property), fields(owner_id = property.owner_id))]
    pub async fn add_property(&self, property: &NewProperty) -> Result<Property> {
        self.properties().create(property).await
    }
}
