//! Database-backed repository tests.
//!
//! These exercise the invariants that live inside the repository
//! transactions and cannot be checked without Postgres: removal cascades,
//! calendar upsert idempotence, and the one-review-per-user-per-spot rule.
//!
//! They are ignored by default. Point `TEST_DATABASE_URL` at a scratch
//! database and run `cargo test -- --ignored`.

use std::time::{SystemTime, UNIX_EPOCH};

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use campground::config::DatabaseConfig;
use campground::db::{self, AsyncDbPool};
use campground::models::{NewAvailabilityEntry, NewBooking, NewCampingSpot, NewReview, NewUser};
use campground::repositories::Repositories;
use campground::services::ReviewService;

fn test_database_config() -> DatabaseConfig {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a scratch Postgres database");
    DatabaseConfig {
        url,
        ..DatabaseConfig::default()
    }
}

async fn connect() -> AsyncDbPool {
    let config = test_database_config();
    let migrate_config = config.clone();
    tokio::task::spawn_blocking(move || db::run_pending_migrations(&migrate_config))
        .await
        .expect("migration task panicked")
        .expect("migrations failed");
    db::establish_async_connection_pool(&config)
        .await
        .expect("pool creation failed")
}

fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}-{}@example.com", tag, std::process::id(), nanos)
}

fn new_user(tag: &str, is_owner: bool) -> NewUser {
    NewUser {
        name: format!("{} person", tag),
        email: unique_email(tag),
        password: "not-a-real-hash".to_string(),
        is_owner,
    }
}

fn new_spot(owner_id: i32) -> NewCampingSpot {
    NewCampingSpot {
        title: "Riverside pitch".to_string(),
        description: "Flat ground by the river".to_string(),
        location: "Ardennes".to_string(),
        price: BigDecimal::from(25),
        owner_id,
        address: None,
        postal_code: None,
        city: None,
        country: None,
        image_url: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
#[ignore]
async fn deleting_spot_removes_bookings_availability_and_reviews() {
    let pool = connect().await;
    let repos = Repositories::new(pool);

    let owner = repos.users.create(new_user("owner", true)).await.unwrap();
    let renter = repos.users.create(new_user("renter", false)).await.unwrap();
    let spot = repos.spots.create(new_spot(owner.id)).await.unwrap();

    repos
        .bookings
        .reserve(NewBooking {
            user_id: renter.id,
            camping_spot_id: spot.id,
            start_date: date(2026, 9, 1),
            end_date: date(2026, 9, 3),
        })
        .await
        .unwrap();
    repos
        .availability
        .upsert_batch(vec![NewAvailabilityEntry {
            camping_spot_id: spot.id,
            date: date(2026, 9, 10),
            is_available: false,
        }])
        .await
        .unwrap();
    repos
        .reviews
        .create(NewReview {
            user_id: renter.id,
            camping_spot_id: spot.id,
            rating: 4,
            comment: "Lovely".to_string(),
        })
        .await
        .unwrap();

    // A reviewed, booked spot must still delete cleanly.
    let deleted = repos.spots.delete_cascade(spot.id).await.unwrap();
    assert!(deleted);

    assert!(repos.spots.find_by_id(spot.id).await.unwrap().is_none());
    assert!(repos.bookings.list_ranges_for_spot(spot.id).await.unwrap().is_empty());
    assert!(repos.availability.list_for_spot(spot.id).await.unwrap().is_empty());
    assert!(repos.reviews.list_for_spot(spot.id).await.unwrap().is_empty());

    repos.users.delete_cascade(renter.id).await.unwrap();
    repos.users.delete_cascade(owner.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn deleting_user_removes_reviews_and_owned_spot_children() {
    let pool = connect().await;
    let repos = Repositories::new(pool);

    let owner = repos.users.create(new_user("owner", true)).await.unwrap();
    let renter = repos.users.create(new_user("renter", false)).await.unwrap();
    let spot = repos.spots.create(new_spot(owner.id)).await.unwrap();

    repos
        .bookings
        .reserve(NewBooking {
            user_id: renter.id,
            camping_spot_id: spot.id,
            start_date: date(2026, 10, 1),
            end_date: date(2026, 10, 2),
        })
        .await
        .unwrap();
    repos
        .reviews
        .create(NewReview {
            user_id: renter.id,
            camping_spot_id: spot.id,
            rating: 5,
            comment: "Great".to_string(),
        })
        .await
        .unwrap();

    // Removing a renter who wrote a review takes their bookings and
    // reviews along but leaves the spot standing.
    assert!(repos.users.delete_cascade(renter.id).await.unwrap());
    assert!(repos.users.find_by_id(renter.id).await.unwrap().is_none());
    assert!(repos.spots.find_by_id(spot.id).await.unwrap().is_some());
    assert!(repos.bookings.list_ranges_for_spot(spot.id).await.unwrap().is_empty());
    assert!(repos.reviews.list_for_spot(spot.id).await.unwrap().is_empty());

    // Removing the owner takes the spot and all of its children.
    assert!(repos.users.delete_cascade(owner.id).await.unwrap());
    assert!(repos.spots.find_by_id(spot.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn availability_upsert_batch_is_idempotent() {
    let pool = connect().await;
    let repos = Repositories::new(pool);

    let owner = repos.users.create(new_user("owner", true)).await.unwrap();
    let spot = repos.spots.create(new_spot(owner.id)).await.unwrap();

    let batch = vec![
        NewAvailabilityEntry {
            camping_spot_id: spot.id,
            date: date(2026, 11, 1),
            is_available: false,
        },
        NewAvailabilityEntry {
            camping_spot_id: spot.id,
            date: date(2026, 11, 2),
            is_available: true,
        },
    ];

    repos.availability.upsert_batch(batch.clone()).await.unwrap();
    let first = repos.availability.list_for_spot(spot.id).await.unwrap();

    repos.availability.upsert_batch(batch).await.unwrap();
    let second = repos.availability.list_for_spot(spot.id).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.date, b.date);
        assert_eq!(a.is_available, b.is_available);
    }

    // Resubmitting a date with a different flag updates in place.
    repos
        .availability
        .upsert_batch(vec![NewAvailabilityEntry {
            camping_spot_id: spot.id,
            date: date(2026, 11, 1),
            is_available: true,
        }])
        .await
        .unwrap();
    let third = repos.availability.list_for_spot(spot.id).await.unwrap();
    assert_eq!(third.len(), 2);
    assert!(third.iter().all(|entry| entry.is_available));

    repos.users.delete_cascade(owner.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn review_resubmission_overwrites_instead_of_duplicating() {
    let pool = connect().await;
    let repos = Repositories::new(pool);
    let reviews = ReviewService::new(repos.reviews.clone());

    let owner = repos.users.create(new_user("owner", true)).await.unwrap();
    let renter = repos.users.create(new_user("renter", false)).await.unwrap();
    let spot = repos.spots.create(new_spot(owner.id)).await.unwrap();

    let (first, created) = reviews
        .upsert_review(renter.id, spot.id, 3, "Fine".to_string())
        .await
        .unwrap();
    assert!(created);

    let (second, created) = reviews
        .upsert_review(renter.id, spot.id, 5, "Changed my mind".to_string())
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(second.rating, 5);

    let listed = repos.reviews.list_for_spot(spot.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].rating, 5);
    assert_eq!(listed[0].comment, "Changed my mind");

    repos.users.delete_cascade(renter.id).await.unwrap();
    repos.users.delete_cascade(owner.id).await.unwrap();
}
