//! Application layer: catalog management services and operator forms.
//!
//! Services consume repository traits, validate operator input and provide
//! the API the management screens (here, the `admin` binary) call.
//!
//! # Available Services
//!
//! - [`services::destination_service::DestinationService`] - Destination catalog management
//! - [`services::organization_service::OrganizationService`] - Organisation catalog management

pub mod forms;
pub mod services;
