//! Organisation catalog management service.

use crate::application::forms::OrganizationForm;
use crate::domain::entities::Organization;
use crate::domain::filter::OrganizationFilter;
use crate::domain::repositories::OrganizationRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service behind the charity management screen.
///
/// Mirrors [`super::DestinationService`], keyed by organisation `name`.
pub struct OrganizationService<R: OrganizationRepository> {
    repository: Arc<R>,
}

impl<R: OrganizationRepository> OrganizationService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filter: OrganizationFilter) -> Result<Vec<Organization>, AppError> {
        self.repository.list(filter).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed form and
    /// [`AppError::Persistence`] on duplicate `name` or database errors.
    pub async fn create(&self, form: &OrganizationForm) -> Result<Organization, AppError> {
        let organization = form.validate()?;
        self.repository.insert(organization.clone()).await?;

        tracing::info!(name = %organization.name, "Organisation added");
        Ok(organization)
    }

    pub async fn load_for_edit(&self, name: &str) -> Result<Option<Organization>, AppError> {
        self.repository.find_by_key(name).await
    }

    /// Full-row replace against the pre-edit `old_name`.
    pub async fn update(&self, old_name: &str, form: &OrganizationForm) -> Result<u64, AppError> {
        let organization = form.validate()?;
        let name = organization.name.clone();
        let rows = self.repository.update_by_key(old_name, organization).await?;

        if rows == 0 {
            tracing::warn!(old_name, "Organisation disappeared before update, nothing written");
        } else {
            tracing::info!(old_name, name = %name, "Organisation updated");
        }

        Ok(rows)
    }

    pub async fn delete(&self, name: &str) -> Result<u64, AppError> {
        let rows = self.repository.delete_by_key(name).await?;

        if rows == 0 {
            tracing::debug!(name, "No organisation to delete");
        } else {
            tracing::info!(name, "Organisation deleted");
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Country;
    use crate::domain::repositories::MockOrganizationRepository;

    fn create_test_form(name: &str) -> OrganizationForm {
        OrganizationForm {
            name: name.to_string(),
            kind: "Education".to_string(),
            country: "Malaysia".to_string(),
            about: "Reading programmes".to_string(),
            website: "books.my".to_string(),
            email: "info@books.my".to_string(),
            location: "Ipoh".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock_repo = MockOrganizationRepository::new();

        mock_repo
            .expect_insert()
            .withf(|o| o.name == "Books for All" && o.country == Country::Malaysia)
            .times(1)
            .returning(|_| Ok(()));

        let service = OrganizationService::new(Arc::new(mock_repo));

        let result = service.create(&create_test_form("Books for All")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_blank_name() {
        let mock_repo = MockOrganizationRepository::new();
        let service = OrganizationService::new(Arc::new(mock_repo));

        let result = service.create(&create_test_form("")).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_list_by_country() {
        let mut mock_repo = MockOrganizationRepository::new();

        mock_repo
            .expect_list()
            .withf(|f| f.country.value() == Some(Country::Singapore))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = OrganizationService::new(Arc::new(mock_repo));

        let filter = OrganizationFilter::all().with_country(Country::Singapore);
        assert!(service.list(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_uses_old_name() {
        let mut mock_repo = MockOrganizationRepository::new();

        mock_repo
            .expect_update_by_key()
            .withf(|old, o| old == "Books for All" && o.name == "Books For Everyone")
            .times(1)
            .returning(|_, _| Ok(1));

        let service = OrganizationService::new(Arc::new(mock_repo));

        let rows = service
            .update("Books for All", &create_test_form("Books For Everyone"))
            .await
            .unwrap();

        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let mut mock_repo = MockOrganizationRepository::new();

        let mut seq = mockall::Sequence::new();
        mock_repo
            .expect_delete_by_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        mock_repo
            .expect_delete_by_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(0));

        let service = OrganizationService::new(Arc::new(mock_repo));

        assert_eq!(service.delete("Books for All").await.unwrap(), 1);
        assert_eq!(service.delete("Books for All").await.unwrap(), 0);
    }
}
