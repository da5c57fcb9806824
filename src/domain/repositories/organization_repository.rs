//! Repository trait for the organisation catalog.

use crate::domain::entities::Organization;
use crate::domain::filter::OrganizationFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for partner organisations, keyed by `name`.
///
/// Same contract as [`super::DestinationRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn list(&self, filter: OrganizationFilter) -> Result<Vec<Organization>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on a duplicate `name`.
    async fn insert(&self, organization: Organization) -> Result<(), AppError>;

    async fn find_by_key(&self, name: &str) -> Result<Option<Organization>, AppError>;

    /// Full-row replace targeting the pre-edit `old_name`.
    async fn update_by_key(
        &self,
        old_name: &str,
        organization: Organization,
    ) -> Result<u64, AppError>;

    async fn delete_by_key(&self, name: &str) -> Result<u64, AppError>;
}
