//! Facet filters and their resolution to parameterized select statements.
//!
//! A filter never produces SQL text from its values. Each combination of
//! facets maps to one static template; the selected facet values travel
//! separately as positional bind parameters.
//!
//! # Destination decision table
//!
//! | country  | duration | shape                    |
//! |----------|----------|--------------------------|
//! | All      | All      | [`QueryShape::All`]      |
//! | value    | All      | [`QueryShape::ByCountry`]|
//! | All      | value    | [`QueryShape::ByDuration`]|
//! | value    | value    | [`QueryShape::ByCountryAndDuration`]|

use std::fmt;
use std::str::FromStr;

use super::entities::{Country, Duration, Facet};
use crate::error::AppError;

const SELECT_DESTINATIONS: &str =
    "SELECT country_from, duration, place, cruise_ship, route, price, date FROM cruise_destination";
const SELECT_DESTINATIONS_BY_COUNTRY: &str = "SELECT country_from, duration, place, cruise_ship, route, price, date FROM cruise_destination WHERE country_from = ?";
const SELECT_DESTINATIONS_BY_DURATION: &str = "SELECT country_from, duration, place, cruise_ship, route, price, date FROM cruise_destination WHERE duration = ?";
const SELECT_DESTINATIONS_BY_COUNTRY_AND_DURATION: &str = "SELECT country_from, duration, place, cruise_ship, route, price, date FROM cruise_destination WHERE country_from = ? AND duration = ?";

const SELECT_ORGANIZATIONS: &str =
    "SELECT name, type, country, about, website, email, location FROM charity_organisation";
const SELECT_ORGANIZATIONS_BY_COUNTRY: &str = "SELECT name, type, country, about, website, email, location FROM charity_organisation WHERE country = ?";

/// Which of the mutually exclusive select templates a filter resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryShape {
    All,
    ByCountry,
    ByDuration,
    ByCountryAndDuration,
}

impl QueryShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryShape::All => "all",
            QueryShape::ByCountry => "by_country",
            QueryShape::ByDuration => "by_duration",
            QueryShape::ByCountryAndDuration => "by_country_and_duration",
        }
    }
}

impl fmt::Display for QueryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A select template plus the values to bind to its `?` placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub shape: QueryShape,
    pub sql: &'static str,
    pub binds: Vec<&'static str>,
}

/// Filter over the destination catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DestinationFilter {
    pub country: Facet<Country>,
    pub duration: Facet<Duration>,
}

impl DestinationFilter {
    /// Filter that matches every destination.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(country: Facet<Country>, duration: Facet<Duration>) -> Self {
        Self { country, duration }
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Facet::Only(country);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Facet::Only(duration);
        self
    }

    /// Parses the operator's facet selections, e.g. `("All", "2 Nights")`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for any value outside `All` and the
    /// enumerated facet values.
    pub fn parse(country: &str, duration: &str) -> Result<Self, AppError> {
        Ok(Self {
            country: Facet::from_str(country)?,
            duration: Facet::from_str(duration)?,
        })
    }

    pub fn resolve(&self) -> ResolvedQuery {
        match (self.country, self.duration) {
            (Facet::All, Facet::All) => ResolvedQuery {
                shape: QueryShape::All,
                sql: SELECT_DESTINATIONS,
                binds: Vec::new(),
            },
            (Facet::Only(country), Facet::All) => ResolvedQuery {
                shape: QueryShape::ByCountry,
                sql: SELECT_DESTINATIONS_BY_COUNTRY,
                binds: vec![country.as_str()],
            },
            (Facet::All, Facet::Only(duration)) => ResolvedQuery {
                shape: QueryShape::ByDuration,
                sql: SELECT_DESTINATIONS_BY_DURATION,
                binds: vec![duration.as_str()],
            },
            (Facet::Only(country), Facet::Only(duration)) => ResolvedQuery {
                shape: QueryShape::ByCountryAndDuration,
                sql: SELECT_DESTINATIONS_BY_COUNTRY_AND_DURATION,
                binds: vec![country.as_str(), duration.as_str()],
            },
        }
    }
}

/// Filter over the organisation catalog. Only the country facet applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrganizationFilter {
    pub country: Facet<Country>,
}

impl OrganizationFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Facet::Only(country);
        self
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unrecognised country.
    pub fn parse(country: &str) -> Result<Self, AppError> {
        Ok(Self {
            country: Facet::from_str(country)?,
        })
    }

    pub fn resolve(&self) -> ResolvedQuery {
        match self.country {
            Facet::All => ResolvedQuery {
                shape: QueryShape::All,
                sql: SELECT_ORGANIZATIONS,
                binds: Vec::new(),
            },
            Facet::Only(country) => ResolvedQuery {
                shape: QueryShape::ByCountry,
                sql: SELECT_ORGANIZATIONS_BY_COUNTRY,
                binds: vec![country.as_str()],
            },
        }
    }
}
