//! Enumerated attributes shared by both catalogs and the facet wrapper used
//! to filter on them.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Text used by operators and the store to mean "no restriction".
pub const ALL: &str = "All";

/// Country a cruise departs from, or where an organisation operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Malaysia,
    Singapore,
}

impl Country {
    pub const VALUES: [Country; 2] = [Country::Malaysia, Country::Singapore];

    /// Canonical text, identical to the stored column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Malaysia => "Malaysia",
            Country::Singapore => "Singapore",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::VALUES
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| {
                AppError::validation(
                    format!("Unknown country '{s}'"),
                    json!({ "allowed": ["Malaysia", "Singapore"] }),
                )
            })
    }
}

/// Length of a cruise in nights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duration {
    #[serde(rename = "1 Night")]
    OneNight,
    #[serde(rename = "2 Nights")]
    TwoNights,
    #[serde(rename = "3 Nights")]
    ThreeNights,
    #[serde(rename = "4 Nights")]
    FourNights,
}

impl Duration {
    pub const VALUES: [Duration; 4] = [
        Duration::OneNight,
        Duration::TwoNights,
        Duration::ThreeNights,
        Duration::FourNights,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::OneNight => "1 Night",
            Duration::TwoNights => "2 Nights",
            Duration::ThreeNights => "3 Nights",
            Duration::FourNights => "4 Nights",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Duration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Duration::VALUES
            .into_iter()
            .find(|d| d.as_str() == s.trim())
            .ok_or_else(|| {
                AppError::validation(
                    format!("Unknown duration '{s}'"),
                    json!({ "allowed": ["1 Night", "2 Nights", "3 Nights", "4 Nights"] }),
                )
            })
    }
}

/// One filter dimension: either unrestricted or pinned to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: Copy> Facet<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Facet::All => None,
            Facet::Only(v) => Some(*v),
        }
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Facet::All, Facet::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str(ALL),
            Facet::Only(v) => v.fmt(f),
        }
    }
}

/// Unrecognised values are rejected rather than widened to `All`.
impl<T: FromStr<Err = AppError>> FromStr for Facet<T> {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == ALL {
            Ok(Facet::All)
        } else {
            s.parse().map(Facet::Only)
        }
    }
}
