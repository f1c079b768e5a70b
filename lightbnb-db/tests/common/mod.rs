//! Shared setup for database-backed tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p lightbnb-db -- --ignored

#![allow(dead_code)]

use chrono::NaiveDate;
use lightbnb_db::{create_pool, Database, DbConfig, NewProperty, NewUser, Reservation, User};
use uuid::Uuid;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Connect to `DATABASE_URL` and make sure the reference schema exists.
pub async fn setup() -> Database {
    let config = DbConfig {
        max_connections: 2,
        ..DbConfig::from_env().expect("config")
    };
    assert!(config.url.is_some(), "DATABASE_URL required");
    let pool = create_pool(&config)
        .await
        .expect("pool creation failed");

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("schema setup failed");

    Database::new(pool)
}

/// A user with an email no other test run will collide with.
pub fn unique_user(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4()),
        password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
    }
}

pub async fn insert_user(db: &Database, name: &str) -> User {
    db.add_user(&unique_user(name)).await.expect("insert user")
}

pub fn new_property(owner_id: i32, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: format!("Stay in {}", city),
        description: None,
        thumbnail_photo_url: "https://example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://example.com/cover.jpg".to_string(),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
        country: "Canada".to_string(),
        street: "1 Main St".to_string(),
        city: city.to_string(),
        province: "British Columbia".to_string(),
        post_code: "V5K".to_string(),
    }
}

pub async fn insert_reservation(
    db: &Database,
    property_id: i32,
    guest_id: i32,
    start: NaiveDate,
    end: NaiveDate,
) -> Reservation {
    sqlx::query_as(
        r#"
        INSERT INTO reservations (start_date, end_date, property_id, guest_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, property_id, guest_id, start_date, end_date
        "#,
    )
    .bind(start)
    .bind(end)
    .bind(property_id)
    .bind(guest_id)
    .fetch_one(db.pool())
    .await
    .expect("insert reservation")
}

pub async fn insert_review(db: &Database, reservation: &Reservation, rating: i16) {
    sqlx::query(
        r#"
        INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(reservation.guest_id)
    .bind(reservation.property_id)
    .bind(reservation.id)
    .bind(rating)
    .execute(db.pool())
    .await
    .expect("insert review");
}

/// Insert a property with one stay and one review of `rating`.
pub async fn reviewed_property(
    db: &Database,
    owner_id: i32,
    guest_id: i32,
    city: &str,
    cost_per_night: i32,
    rating: i16,
) -> i32 {
    let property = db
        .add_property(&new_property(owner_id, city, cost_per_night))
        .await
        .expect("insert property");
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
    let reservation = insert_reservation(db, property.id, guest_id, start, end).await;
    insert_review(db, &reservation, rating).await;
    property.id
}
