//! # Cruise Catalog
//!
//! Catalog store and report exporter for a cruise-booking business: cruise
//! destinations and partner charity organisations, filtered by country and
//! trip duration, with fixed-format text reports for downstream consumers.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Catalog entities, filter resolution and repository traits
//! - **Application Layer** ([`application`]) - Operator forms and management services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store and repository implementations
//! - **Export Layer** ([`export`]) - Report formatting, export jobs and sinks
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://catalog.db"
//! export EXPORT_DIR="./reports"
//!
//! # Write the four standard reports
//! cargo run
//!
//! # Manage the catalog from the terminal
//! cargo run --bin admin -- destination list --country Malaysia
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;
pub mod logging;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::forms::{DestinationForm, OrganizationForm};
    pub use crate::application::services::{DestinationService, OrganizationService};
    pub use crate::domain::entities::{Country, Destination, Duration, Facet, Organization};
    pub use crate::domain::filter::{DestinationFilter, OrganizationFilter};
    pub use crate::domain::repositories::{DestinationRepository, OrganizationRepository};
    pub use crate::error::AppError;
    pub use crate::export::{ExportJob, Exporter, FileSink};
    pub use crate::infrastructure::persistence::{
        Database, SqliteDestinationRepository, SqliteOrganizationRepository,
    };
}
