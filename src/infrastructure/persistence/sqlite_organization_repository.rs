//! SQLite implementation of the organisation repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Organization;
use crate::domain::filter::OrganizationFilter;
use crate::domain::repositories::OrganizationRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct OrganizationRow {
    name: String,
    #[sqlx(rename = "type")]
    kind: String,
    country: String,
    about: String,
    website: String,
    email: String,
    location: String,
}

impl TryFrom<OrganizationRow> for Organization {
    type Error = AppError;

    fn try_from(row: OrganizationRow) -> Result<Self, Self::Error> {
        let country = row.country.parse().map_err(|e: AppError| {
            AppError::persistence(
                format!("Unreadable country for organisation '{}': {e}", row.name),
                json!({ "column": "country", "value": row.country }),
            )
        })?;

        Ok(Organization::new(
            row.name,
            row.kind,
            country,
            row.about,
            row.website,
            row.email,
            row.location,
        ))
    }
}

/// SQLite repository for the organisation catalog.
pub struct SqliteOrganizationRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteOrganizationRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationRepository for SqliteOrganizationRepository {
    async fn list(&self, filter: OrganizationFilter) -> Result<Vec<Organization>, AppError> {
        let resolved = filter.resolve();
        tracing::debug!(shape = %resolved.shape, binds = ?resolved.binds, "Listing organisations");

        let mut query = sqlx::query_as::<_, OrganizationRow>(resolved.sql);
        for value in resolved.binds {
            query = query.bind(value);
        }

        let rows = query.fetch_all(self.pool.as_ref()).await?;

        rows.into_iter().map(Organization::try_from).collect()
    }

    async fn insert(&self, organization: Organization) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO charity_organisation (name, type, country, about, website, email, location)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&organization.name)
        .bind(&organization.kind)
        .bind(organization.country.as_str())
        .bind(&organization.about)
        .bind(&organization.website)
        .bind(&organization.email)
        .bind(&organization.location)
        .execute(self.pool.as_ref())
        .await?;

        tracing::debug!(name = %organization.name, "Inserted organisation");
        Ok(())
    }

    async fn find_by_key(&self, name: &str) -> Result<Option<Organization>, AppError> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT name, type, country, about, website, email, location
            FROM charity_organisation
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Organization::try_from).transpose()
    }

    async fn update_by_key(
        &self,
        old_name: &str,
        organization: Organization,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE charity_organisation SET
                name     = ?,
                type     = ?,
                country  = ?,
                about    = ?,
                website  = ?,
                email    = ?,
                location = ?
            WHERE name = ?
            "#,
        )
        .bind(&organization.name)
        .bind(&organization.kind)
        .bind(organization.country.as_str())
        .bind(&organization.about)
        .bind(&organization.website)
        .bind(&organization.email)
        .bind(&organization.location)
        .bind(old_name)
        .execute(self.pool.as_ref())
        .await?;

        tracing::debug!(
            old_name,
            name = %organization.name,
            rows = result.rows_affected(),
            "Updated organisation"
        );
        Ok(result.rows_affected())
    }

    async fn delete_by_key(&self, name: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM charity_organisation WHERE name = ?")
            .bind(name)
            .execute(self.pool.as_ref())
            .await?;

        tracing::debug!(name, rows = result.rows_affected(), "Deleted organisation");
        Ok(result.rows_affected())
    }
}
