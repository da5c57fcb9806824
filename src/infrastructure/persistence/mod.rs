//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-checked, positionally bound statements.
//!
//! # Components
//!
//! - [`Database`] - Shared single-connection handle and schema migrations
//! - [`SqliteDestinationRepository`] - Destination catalog storage
//! - [`SqliteOrganizationRepository`] - Organisation catalog storage

pub mod database;
pub mod sqlite_destination_repository;
pub mod sqlite_organization_repository;

pub use database::Database;
pub use sqlite_destination_repository::SqliteDestinationRepository;
pub use sqlite_organization_repository::SqliteOrganizationRepository;
