//! SQLite implementation of the destination repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Destination;
use crate::domain::filter::DestinationFilter;
use crate::domain::repositories::DestinationRepository;
use crate::error::AppError;

/// Column values exactly as stored in `cruise_destination`.
#[derive(Debug, sqlx::FromRow)]
struct DestinationRow {
    country_from: String,
    duration: String,
    place: String,
    cruise_ship: String,
    route: String,
    price: i64,
    date: String,
}

impl TryFrom<DestinationRow> for Destination {
    type Error = AppError;

    fn try_from(row: DestinationRow) -> Result<Self, Self::Error> {
        let unreadable = |column: &str, value: &str, e: AppError| {
            AppError::persistence(
                format!("Unreadable {column} for destination '{}': {e}", row.place),
                json!({ "column": column, "value": value }),
            )
        };

        let country_from = row
            .country_from
            .parse()
            .map_err(|e| unreadable("country_from", &row.country_from, e))?;
        let duration = row
            .duration
            .parse()
            .map_err(|e| unreadable("duration", &row.duration, e))?;

        Ok(Destination::new(
            country_from,
            duration,
            row.place,
            row.cruise_ship,
            row.route,
            row.price,
            row.date,
        ))
    }
}

/// SQLite repository for the destination catalog.
///
/// Every statement is prepared with positional `?` placeholders.
pub struct SqliteDestinationRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteDestinationRepository {
    /// Creates a new repository over the shared connection.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DestinationRepository for SqliteDestinationRepository {
    async fn list(&self, filter: DestinationFilter) -> Result<Vec<Destination>, AppError> {
        let resolved = filter.resolve();
        tracing::debug!(shape = %resolved.shape, binds = ?resolved.binds, "Listing destinations");

        let mut query = sqlx::query_as::<_, DestinationRow>(resolved.sql);
        for value in resolved.binds {
            query = query.bind(value);
        }

        let rows = query.fetch_all(self.pool.as_ref()).await?;

        rows.into_iter().map(Destination::try_from).collect()
    }

    async fn insert(&self, destination: Destination) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO cruise_destination (country_from, duration, place, cruise_ship, route, price, date)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(destination.country_from.as_str())
        .bind(destination.duration.as_str())
        .bind(&destination.place)
        .bind(&destination.cruise_ship)
        .bind(&destination.route)
        .bind(destination.price)
        .bind(&destination.date)
        .execute(self.pool.as_ref())
        .await?;

        tracing::debug!(place = %destination.place, "Inserted destination");
        Ok(())
    }

    async fn find_by_key(&self, place: &str) -> Result<Option<Destination>, AppError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT country_from, duration, place, cruise_ship, route, price, date
            FROM cruise_destination
            WHERE place = ?
            "#,
        )
        .bind(place)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Destination::try_from).transpose()
    }

    async fn update_by_key(
        &self,
        old_place: &str,
        destination: Destination,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE cruise_destination SET
                country_from = ?,
                duration     = ?,
                place        = ?,
                cruise_ship  = ?,
                route        = ?,
                price        = ?,
                date         = ?
            WHERE place = ?
            "#,
        )
        .bind(destination.country_from.as_str())
        .bind(destination.duration.as_str())
        .bind(&destination.place)
        .bind(&destination.cruise_ship)
        .bind(&destination.route)
        .bind(destination.price)
        .bind(&destination.date)
        .bind(old_place)
        .execute(self.pool.as_ref())
        .await?;

        tracing::debug!(
            old_place,
            place = %destination.place,
            rows = result.rows_affected(),
            "Updated destination"
        );
        Ok(result.rows_affected())
    }

    async fn delete_by_key(&self, place: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM cruise_destination WHERE place = ?")
            .bind(place)
            .execute(self.pool.as_ref())
            .await?;

        tracing::debug!(place, rows = result.rows_affected(), "Deleted destination");
        Ok(result.rows_affected())
    }
}
