//! Property repository
//!
//! Search assembles its WHERE/HAVING clauses from [`PropertySearch`] through
//! [`SelectQuery`], so the SQL and its parameters can be checked without a
//! database.

use sqlx::PgPool;
use tracing::debug;

use super::log_failure;
use crate::db::query::{BuiltQuery, Predicate, SelectQuery};
use crate::error::DbError;
use crate::models::{NewProperty, Property, PropertyListing, PropertySearch};

/// Build the search statement for `options`, capped at `limit` rows.
///
/// - `city` matches anywhere in the name, case-insensitively
/// - both price bounds collapse into one inclusive BETWEEN
/// - `minimum_rating` filters the per-property average, so it lives in HAVING
pub fn build_search_query(options: &PropertySearch, limit: u32) -> BuiltQuery {
    let mut query = SelectQuery::new(
        "properties.*, avg(property_reviews.rating)::float8 AS average_rating",
        "properties\nJOIN property_reviews ON properties.id = property_reviews.property_id",
    );

    if let Some(city) = options.city() {
        query = query.filter(Predicate::new("properties.city ILIKE ?").bind(format!("%{}%", city)));
    }

    if let Some(owner_id) = options.owner_id() {
        query = query.filter(Predicate::new("properties.owner_id = ?").bind(owner_id));
    }

    query = match (options.minimum_price_cents(), options.maximum_price_cents()) {
        (Some(min), Some(max)) => query.filter(
            Predicate::new("properties.cost_per_night BETWEEN ? AND ?")
                .bind(min)
                .bind(max),
        ),
        (Some(min), None) => {
            query.filter(Predicate::new("properties.cost_per_night >= ?").bind(min))
        }
        (None, Some(max)) => {
            query.filter(Predicate::new("properties.cost_per_night <= ?").bind(max))
        }
        (None, None) => query,
    };

    query = query.group_by("properties.id");

    if let Some(rating) = options.minimum_rating() {
        query = query.having(Predicate::new("avg(property_reviews.rating) >= ?").bind(rating));
    }

    query
        .order_by("properties.cost_per_night")
        .limit(i64::from(limit))
        .build()
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search reviewed properties, cheapest first.
    pub async fn search(
        &self,
        options: &PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>, DbError> {
        let built = build_search_query(options, limit);
        let params: Vec<String> = built.params.iter().map(ToString::to_string).collect();
        debug!(
            sql = %built.sql,
            params = ?params,
            filtered = !options.is_empty(),
            "property search"
        );

        built
            .query_as()
            .fetch_all(self.pool)
            .await
            .map_err(log_failure("get_all_properties"))
    }

    /// Insert a property, returning the stored row.
    pub async fn create(&self, property: &NewProperty) -> Result<Property, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(property.description.as_deref())
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(self.pool)
        .await
        .map_err(log_failure("add_property"))
    }
}
