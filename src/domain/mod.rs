//! Domain layer containing catalog entities, filters and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Catalog records and their enumerated attributes
//! - [`filter`] - Facet filters and their resolution to select templates
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure. Repository traits
//! define contracts implemented by `crate::infrastructure::persistence`.

pub mod entities;
pub mod filter;
pub mod repositories;
