//! Raw operator input for catalog edits.
//!
//! Forms hold exactly what was typed into the edit surface. Converting a form
//! into an entity is the only place operator text is checked; repositories
//! only ever see validated records.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{Destination, Organization};
use crate::error::AppError;

/// Free-text fields of a destination, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationForm {
    pub country_from: String,
    pub duration: String,
    pub place: String,
    pub cruise_ship: String,
    pub route: String,
    pub price: String,
    pub date: String,
}

impl DestinationForm {
    /// Validates and converts the form into a [`Destination`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `place` is blank, the country or
    /// duration is not one of the enumerated values, or the price is not a
    /// non-negative integer.
    pub fn validate(&self) -> Result<Destination, AppError> {
        let place = require_key("place", &self.place)?;
        let price = parse_price(&self.price)?;

        Ok(Destination::new(
            self.country_from.parse()?,
            self.duration.parse()?,
            place,
            self.cruise_ship.trim().to_string(),
            self.route.trim().to_string(),
            price,
            self.date.trim().to_string(),
        ))
    }
}

/// Pre-fills the edit surface from a stored record.
impl From<&Destination> for DestinationForm {
    fn from(d: &Destination) -> Self {
        Self {
            country_from: d.country_from.to_string(),
            duration: d.duration.to_string(),
            place: d.place.clone(),
            cruise_ship: d.cruise_ship.clone(),
            route: d.route.clone(),
            price: d.price.to_string(),
            date: d.date.clone(),
        }
    }
}

/// Free-text fields of an organisation, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationForm {
    pub name: String,
    pub kind: String,
    pub country: String,
    pub about: String,
    pub website: String,
    pub email: String,
    pub location: String,
}

impl OrganizationForm {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is blank or the country is
    /// not recognised.
    pub fn validate(&self) -> Result<Organization, AppError> {
        let name = require_key("name", &self.name)?;

        Ok(Organization::new(
            name,
            self.kind.trim().to_string(),
            self.country.parse()?,
            self.about.trim().to_string(),
            self.website.trim().to_string(),
            self.email.trim().to_string(),
            self.location.trim().to_string(),
        ))
    }
}

impl From<&Organization> for OrganizationForm {
    fn from(o: &Organization) -> Self {
        Self {
            name: o.name.clone(),
            kind: o.kind.clone(),
            country: o.country.to_string(),
            about: o.about.clone(),
            website: o.website.clone(),
            email: o.email.clone(),
            location: o.location.clone(),
        }
    }
}

fn require_key(field: &'static str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(
            format!("{field} must not be empty"),
            json!({ "field": field }),
        ));
    }
    Ok(value.to_string())
}

/// Parses a price typed by the operator.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for non-numeric or negative input.
pub fn parse_price(input: &str) -> Result<i64, AppError> {
    let price: i64 = input.trim().parse().map_err(|_| {
        AppError::validation(
            "Price must be a whole number",
            json!({ "field": "price", "value": input }),
        )
    })?;

    if price < 0 {
        return Err(AppError::validation(
            "Price must not be negative",
            json!({ "field": "price", "value": price }),
        ));
    }

    Ok(price)
}
