//! Core catalog entities.
//!
//! Entities are plain data structures without persistence logic.
//!
//! # Entity Types
//!
//! - [`Destination`] - A cruise offering, keyed by `place`
//! - [`Organization`] - A partner charity, keyed by `name`
//! - [`Country`], [`Duration`] - Enumerated attributes, also used as filter facets

pub mod destination;
pub mod facets;
pub mod organization;

pub use destination::Destination;
pub use facets::{Country, Duration, Facet};
pub use organization::Organization;
