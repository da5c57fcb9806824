//! Destination catalog management service.

use crate::application::forms::DestinationForm;
use crate::domain::entities::Destination;
use crate::domain::filter::DestinationFilter;
use crate::domain::repositories::DestinationRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service behind the destination management screen.
///
/// Validates operator forms before they reach the repository and drives the
/// two-phase edit: [`Self::load_for_edit`] reads the current row, and
/// [`Self::update`] later writes the whole row back against the key that was
/// loaded. The two phases are separate statements; a delete landing between
/// them turns the update into a zero-row write.
pub struct DestinationService<R: DestinationRepository> {
    repository: Arc<R>,
}

impl<R: DestinationRepository> DestinationService<R> {
    /// Creates a new destination service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists destinations matching the facet filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn list(&self, filter: DestinationFilter) -> Result<Vec<Destination>, AppError> {
        self.repository.list(filter).await
    }

    /// Validates and stores a new destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is malformed (nothing is
    /// written). Returns [`AppError::Persistence`] on duplicate `place` or
    /// database errors.
    pub async fn create(&self, form: &DestinationForm) -> Result<Destination, AppError> {
        let destination = form.validate()?;
        self.repository.insert(destination.clone()).await?;

        tracing::info!(place = %destination.place, "Destination added");
        Ok(destination)
    }

    /// Fetches the stored row to pre-populate an edit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn load_for_edit(&self, place: &str) -> Result<Option<Destination>, AppError> {
        self.repository.find_by_key(place).await
    }

    /// Replaces the row keyed by `old_place` with the edited form.
    ///
    /// The `WHERE` clause always uses `old_place`, even when the form renames
    /// the destination. Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed form.
    /// Returns [`AppError::Persistence`] on key collision or database errors.
    pub async fn update(&self, old_place: &str, form: &DestinationForm) -> Result<u64, AppError> {
        let destination = form.validate()?;
        let place = destination.place.clone();
        let rows = self.repository.update_by_key(old_place, destination).await?;

        if rows == 0 {
            tracing::warn!(old_place, "Destination disappeared before update, nothing written");
        } else {
            tracing::info!(old_place, place = %place, "Destination updated");
        }

        Ok(rows)
    }

    /// Deletes a destination. Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn delete(&self, place: &str) -> Result<u64, AppError> {
        let rows = self.repository.delete_by_key(place).await?;

        if rows == 0 {
            tracing::debug!(place, "No destination to delete");
        } else {
            tracing::info!(place, "Destination deleted");
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Country, Duration};
    use crate::domain::filter::QueryShape;
    use crate::domain::repositories::MockDestinationRepository;
    use serde_json::json;

    fn create_test_form(place: &str) -> DestinationForm {
        DestinationForm {
            country_from: "Malaysia".to_string(),
            duration: "2 Nights".to_string(),
            place: place.to_string(),
            cruise_ship: "Star".to_string(),
            route: "A-B".to_string(),
            price: "500".to_string(),
            date: "2025-01-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock_repo = MockDestinationRepository::new();

        mock_repo
            .expect_insert()
            .withf(|d| d.place == "Langkawi" && d.price == 500)
            .times(1)
            .returning(|_| Ok(()));

        let service = DestinationService::new(Arc::new(mock_repo));

        let result = service.create(&create_test_form("Langkawi")).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().country_from, Country::Malaysia);
    }

    #[tokio::test]
    async fn test_create_invalid_price_never_touches_store() {
        let mock_repo = MockDestinationRepository::new();
        let service = DestinationService::new(Arc::new(mock_repo));

        let form = DestinationForm {
            price: "RM500".to_string(),
            ..create_test_form("Langkawi")
        };
        let result = service.create(&form).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_duplicate_surfaces_persistence_error() {
        let mut mock_repo = MockDestinationRepository::new();

        mock_repo.expect_insert().times(1).returning(|_| {
            Err(AppError::persistence(
                "Unique constraint violation",
                json!({}),
            ))
        });

        let service = DestinationService::new(Arc::new(mock_repo));

        let result = service.create(&create_test_form("Langkawi")).await;

        assert!(matches!(result.unwrap_err(), AppError::Persistence { .. }));
    }

    #[tokio::test]
    async fn test_list_passes_filter_through() {
        let mut mock_repo = MockDestinationRepository::new();

        mock_repo
            .expect_list()
            .withf(|f| f.resolve().shape == QueryShape::ByDuration)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = DestinationService::new(Arc::new(mock_repo));

        let filter = DestinationFilter::all().with_duration(Duration::TwoNights);
        let result = service.list(filter).await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_targets_old_key_when_renamed() {
        let mut mock_repo = MockDestinationRepository::new();

        mock_repo
            .expect_update_by_key()
            .withf(|old, d| old == "Langkawi" && d.place == "Pulau Langkawi")
            .times(1)
            .returning(|_, _| Ok(1));

        let service = DestinationService::new(Arc::new(mock_repo));

        let rows = service
            .update("Langkawi", &create_test_form("Pulau Langkawi"))
            .await
            .unwrap();

        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_update_of_vanished_row_is_not_an_error() {
        let mut mock_repo = MockDestinationRepository::new();

        mock_repo
            .expect_update_by_key()
            .times(1)
            .returning(|_, _| Ok(0));

        let service = DestinationService::new(Arc::new(mock_repo));

        let result = service.update("Gone", &create_test_form("Gone")).await;

        assert_eq!(result.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_rejects_bad_form_before_write() {
        let mock_repo = MockDestinationRepository::new();
        let service = DestinationService::new(Arc::new(mock_repo));

        let form = DestinationForm {
            country_from: "All".to_string(),
            ..create_test_form("Langkawi")
        };

        let result = service.update("Langkawi", &form).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let mut mock_repo = MockDestinationRepository::new();

        mock_repo
            .expect_delete_by_key()
            .withf(|place| place == "Nowhere")
            .times(1)
            .returning(|_| Ok(0));

        let service = DestinationService::new(Arc::new(mock_repo));

        assert_eq!(service.delete("Nowhere").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_load_for_edit_missing_is_none() {
        let mut mock_repo = MockDestinationRepository::new();

        mock_repo
            .expect_find_by_key()
            .times(1)
            .returning(|_| Ok(None));

        let service = DestinationService::new(Arc::new(mock_repo));

        assert!(service.load_for_edit("Nowhere").await.unwrap().is_none());
    }
}
