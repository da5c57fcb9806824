//! Repository trait definitions for the domain layer.
//!
//! These traits abstract catalog storage following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`DestinationRepository`] - Cruise destination CRUD and filtered listing
//! - [`OrganizationRepository`] - Partner organisation CRUD and filtered listing

pub mod destination_repository;
pub mod organization_repository;

pub use destination_repository::DestinationRepository;
pub use organization_repository::OrganizationRepository;

#[cfg(test)]
pub use destination_repository::MockDestinationRepository;
#[cfg(test)]
pub use organization_repository::MockOrganizationRepository;
