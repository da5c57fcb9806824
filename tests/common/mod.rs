#![allow(dead_code)]

use cruise_catalog::domain::entities::{Country, Destination, Duration, Organization};
use cruise_catalog::infrastructure::persistence::{
    Database, SqliteDestinationRepository, SqliteOrganizationRepository,
};

/// Fresh in-memory store with the real migrations applied.
pub async fn test_db() -> Database {
    let db = Database::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    db
}

pub fn destination_repo(db: &Database) -> SqliteDestinationRepository {
    SqliteDestinationRepository::new(db.pool())
}

pub fn organization_repo(db: &Database) -> SqliteOrganizationRepository {
    SqliteOrganizationRepository::new(db.pool())
}

pub fn destination(place: &str, country: Country, duration: Duration, price: i64) -> Destination {
    Destination::new(
        country,
        duration,
        place.to_string(),
        "Star".to_string(),
        "A-B".to_string(),
        price,
        "2025-01-01".to_string(),
    )
}

pub fn langkawi() -> Destination {
    destination("Langkawi", Country::Malaysia, Duration::TwoNights, 500)
}

pub fn organization(name: &str, country: Country) -> Organization {
    Organization::new(
        name.to_string(),
        "Environment".to_string(),
        country,
        "Coastal clean-ups".to_string(),
        format!("{}.org", name.to_lowercase().replace(' ', "")),
        "hello@example.org".to_string(),
        "Harbourfront".to_string(),
    )
}

/// Three Malaysia and two Singapore destinations.
pub fn mixed_destinations() -> Vec<Destination> {
    vec![
        destination("Langkawi", Country::Malaysia, Duration::TwoNights, 500),
        destination("Penang", Country::Malaysia, Duration::ThreeNights, 650),
        destination("Port Klang", Country::Malaysia, Duration::TwoNights, 420),
        destination("Marina Bay", Country::Singapore, Duration::OneNight, 300),
        destination("Sentosa", Country::Singapore, Duration::FourNights, 980),
    ]
}
