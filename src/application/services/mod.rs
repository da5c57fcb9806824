//! Business logic services for the application layer.

pub mod destination_service;
pub mod organization_service;

pub use destination_service::DestinationService;
pub use organization_service::OrganizationService;
