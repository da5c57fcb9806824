//! Partner organisation entity.

use serde::{Deserialize, Serialize};

use super::facets::Country;

/// A charity organisation partnered with the cruise operator.
///
/// `name` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub country: Country,
    pub about: String,
    pub website: String,
    pub email: String,
    pub location: String,
}

impl Organization {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        kind: String,
        country: Country,
        about: String,
        website: String,
        email: String,
        location: String,
    ) -> Self {
        Self {
            name,
            kind,
            country,
            about,
            website,
            email,
            location,
        }
    }

    pub fn key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_serializes_kind_as_type() {
        let org = Organization::new(
            "Ocean Aid".to_string(),
            "Environment".to_string(),
            Country::Singapore,
            "Beach clean-ups".to_string(),
            "oceanaid.sg".to_string(),
            "hello@oceanaid.sg".to_string(),
            "Sentosa".to_string(),
        );

        let value = serde_json::to_value(&org).unwrap();
        assert_eq!(value["type"], "Environment");
        assert_eq!(value["country"], "Singapore");
        assert_eq!(org.key(), "Ocean Aid");
    }
}
