//! Repository trait for the destination catalog.

use crate::domain::entities::Destination;
use crate::domain::filter::DestinationFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for cruise destinations, keyed by `place`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteDestinationRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_destination.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Lists destinations matching the filter, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn list(&self, filter: DestinationFilter) -> Result<Vec<Destination>, AppError>;

    /// Inserts one destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if `place` already exists or the
    /// store is unreachable.
    async fn insert(&self, destination: Destination) -> Result<(), AppError>;

    /// Reads the row an edit will start from.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_by_key(&self, place: &str) -> Result<Option<Destination>, AppError>;

    /// Replaces every column of the row currently keyed by `old_place`.
    ///
    /// Returns the number of rows changed. Zero means the row vanished
    /// between [`Self::find_by_key`] and this call, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the new `place` collides with
    /// another row, or on database errors.
    async fn update_by_key(
        &self,
        old_place: &str,
        destination: Destination,
    ) -> Result<u64, AppError>;

    /// Deletes the row keyed by `place`, returning rows removed (0 or 1).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn delete_by_key(&self, place: &str) -> Result<u64, AppError>;
}
