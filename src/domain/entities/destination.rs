//! Cruise destination entity.

use serde::{Deserialize, Serialize};

use super::facets::{Country, Duration};

/// A cruise offering in the destination catalog.
///
/// `place` is the natural key used for point updates and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub country_from: Country,
    pub duration: Duration,
    pub place: String,
    pub cruise_ship: String,
    pub route: String,
    pub price: i64,
    pub date: String,
}

impl Destination {
    /// Creates a new Destination instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let langkawi = Destination::new(
    ///     Country::Malaysia,
    ///     Duration::TwoNights,
    ///     "Langkawi".to_string(),
    ///     "Star".to_string(),
    ///     "A-B".to_string(),
    ///     500,
    ///     "2025-01-01".to_string(),
    /// );
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        country_from: Country,
        duration: Duration,
        place: String,
        cruise_ship: String,
        route: String,
        price: i64,
        date: String,
    ) -> Self {
        Self {
            country_from,
            duration,
            place,
            cruise_ship,
            route,
            price,
            date,
        }
    }

    pub fn key(&self) -> &str {
        &self.place
    }
}
