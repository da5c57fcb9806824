//! Export jobs and the single pipeline that runs them.
//!
//! A job is plain configuration: which catalog and filter to fetch, and the
//! output name to write to. [`Exporter::run`] is the only fetch → format →
//! write loop; adding a regional breakdown means adding an [`ExportJob`]
//! value, not another pipeline.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::Country;
use crate::domain::filter::{DestinationFilter, OrganizationFilter};
use crate::domain::repositories::{DestinationRepository, OrganizationRepository};
use crate::error::AppError;

use super::formatter::render_report;
use super::sink::ReportSink;

/// Which catalog a job reads and how it is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    Destinations(DestinationFilter),
    Organizations(OrganizationFilter),
}

/// One export variant: a fixed filter and the output it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub label: String,
    pub scope: ExportScope,
    pub file_name: String,
}

impl ExportJob {
    pub fn new(label: impl Into<String>, scope: ExportScope, file_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            scope,
            file_name: file_name.into(),
        }
    }

    pub fn destinations_all() -> Self {
        Self::new(
            "destinations-all",
            ExportScope::Destinations(DestinationFilter::all()),
            "allDestination.txt",
        )
    }

    pub fn destinations_malaysia() -> Self {
        Self::new(
            "destinations-malaysia",
            ExportScope::Destinations(DestinationFilter::all().with_country(Country::Malaysia)),
            "malaysiaDestination.txt",
        )
    }

    pub fn destinations_singapore() -> Self {
        Self::new(
            "destinations-singapore",
            ExportScope::Destinations(DestinationFilter::all().with_country(Country::Singapore)),
            "singaporeDestination.txt",
        )
    }

    pub fn organizations_all() -> Self {
        Self::new(
            "organizations-all",
            ExportScope::Organizations(OrganizationFilter::all()),
            "allCharities.txt",
        )
    }

    /// The four standard exports, in the order the export entry point runs them.
    pub fn standard() -> Vec<ExportJob> {
        vec![
            Self::destinations_singapore(),
            Self::destinations_malaysia(),
            Self::destinations_all(),
            Self::organizations_all(),
        ]
    }

    /// Looks up a standard job by label.
    pub fn find_standard(label: &str) -> Option<ExportJob> {
        Self::standard().into_iter().find(|job| job.label == label)
    }
}

impl fmt::Display for ExportJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.label, self.file_name)
    }
}

/// What a successful job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub label: String,
    pub file_name: String,
    pub records: usize,
}

/// Result of one job inside a batch.
#[derive(Debug)]
pub struct ExportOutcome {
    pub label: String,
    pub result: Result<ExportSummary, AppError>,
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs export jobs against both catalogs and a report sink.
pub struct Exporter<D, O, S>
where
    D: DestinationRepository,
    O: OrganizationRepository,
    S: ReportSink,
{
    destinations: Arc<D>,
    organizations: Arc<O>,
    sink: Arc<S>,
}

impl<D, O, S> Exporter<D, O, S>
where
    D: DestinationRepository,
    O: OrganizationRepository,
    S: ReportSink,
{
    pub fn new(destinations: Arc<D>, organizations: Arc<O>, sink: Arc<S>) -> Self {
        Self {
            destinations,
            organizations,
            sink,
        }
    }

    /// Fetches the job's records, renders them and writes the report.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the fetch fails (nothing is
    /// written) and [`AppError::Sink`] if the report cannot be written.
    pub async fn run(&self, job: &ExportJob) -> Result<ExportSummary, AppError> {
        let (report, records) = match job.scope {
            ExportScope::Destinations(filter) => {
                let rows = self.destinations.list(filter).await?;
                (render_report(&rows), rows.len())
            }
            ExportScope::Organizations(filter) => {
                let rows = self.organizations.list(filter).await?;
                (render_report(&rows), rows.len())
            }
        };

        self.sink.write(&job.file_name, &report).await?;

        tracing::info!(
            job = %job.label,
            file = %job.file_name,
            records,
            "Export written"
        );

        Ok(ExportSummary {
            label: job.label.clone(),
            file_name: job.file_name.clone(),
            records,
        })
    }

    /// Runs every job in order. A failing job is logged and recorded in its
    /// outcome; the remaining jobs still run.
    pub async fn run_batch(&self, jobs: &[ExportJob]) -> Vec<ExportOutcome> {
        let mut outcomes = Vec::with_capacity(jobs.len());

        for job in jobs {
            let result = self.run(job).await;
            if let Err(e) = &result {
                tracing::error!(
                    job = %job.label,
                    code = e.code(),
                    error = %e,
                    "Export failed"
                );
            }
            outcomes.push(ExportOutcome {
                label: job.label.clone(),
                result,
            });
        }

        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Destination, Duration, Facet, Organization};
    use crate::domain::repositories::{MockDestinationRepository, MockOrganizationRepository};
    use crate::export::formatter::ReportRecord;
    use crate::export::sink::MockReportSink;
    use serde_json::json;

    fn destination(place: &str, country: Country) -> Destination {
        Destination::new(
            country,
            Duration::ThreeNights,
            place.to_string(),
            "Star".to_string(),
            "Loop".to_string(),
            700,
            "2025-06-01".to_string(),
        )
    }

    /// Three Malaysia rows and two Singapore rows; the mock applies the
    /// country facet the way the store would.
    fn mixed_destinations() -> MockDestinationRepository {
        let fixture = vec![
            destination("Langkawi", Country::Malaysia),
            destination("Penang", Country::Malaysia),
            destination("Port Klang", Country::Malaysia),
            destination("Marina Bay", Country::Singapore),
            destination("Sentosa", Country::Singapore),
        ];

        let mut mock_repo = MockDestinationRepository::new();
        mock_repo.expect_list().returning(move |filter| {
            Ok(fixture
                .iter()
                .filter(|d| match filter.country {
                    Facet::All => true,
                    Facet::Only(c) => d.country_from == c,
                })
                .cloned()
                .collect())
        });
        mock_repo
    }

    fn no_organizations() -> MockOrganizationRepository {
        let mut mock_repo = MockOrganizationRepository::new();
        mock_repo.expect_list().returning(|_| Ok(vec![]));
        mock_repo
    }

    #[test]
    fn test_standard_jobs_order_and_files() {
        let jobs = ExportJob::standard();
        let files: Vec<_> = jobs.iter().map(|j| j.file_name.as_str()).collect();

        assert_eq!(
            files,
            vec![
                "singaporeDestination.txt",
                "malaysiaDestination.txt",
                "allDestination.txt",
                "allCharities.txt",
            ]
        );
        assert_eq!(
            ExportJob::find_standard("destinations-malaysia"),
            Some(ExportJob::destinations_malaysia())
        );
        assert!(ExportJob::find_standard("destinations-japan").is_none());
    }

    #[tokio::test]
    async fn test_malaysia_export_has_three_blocks() {
        let mut sink = MockReportSink::new();
        sink.expect_write()
            .withf(|name, contents| {
                name == "malaysiaDestination.txt"
                    && contents.matches(Destination::HEADER).count() == 3
                    && !contents.contains("Singapore")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let exporter = Exporter::new(
            Arc::new(mixed_destinations()),
            Arc::new(no_organizations()),
            Arc::new(sink),
        );

        let summary = exporter
            .run(&ExportJob::destinations_malaysia())
            .await
            .unwrap();

        assert_eq!(summary.records, 3);
        assert_eq!(summary.file_name, "malaysiaDestination.txt");
    }

    #[tokio::test]
    async fn test_organizations_export_uses_organization_header() {
        let mut organizations = MockOrganizationRepository::new();
        organizations.expect_list().times(1).returning(|_| {
            Ok(vec![Organization::new(
                "Ocean Aid".to_string(),
                "Environment".to_string(),
                Country::Singapore,
                "Beach clean-ups".to_string(),
                "oceanaid.sg".to_string(),
                "hello@oceanaid.sg".to_string(),
                "Sentosa".to_string(),
            )])
        });

        let mut sink = MockReportSink::new();
        sink.expect_write()
            .withf(|name, contents| {
                name == "allCharities.txt" && contents.starts_with(Organization::HEADER)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let exporter = Exporter::new(
            Arc::new(MockDestinationRepository::new()),
            Arc::new(organizations),
            Arc::new(sink),
        );

        let summary = exporter.run(&ExportJob::organizations_all()).await.unwrap();
        assert_eq!(summary.records, 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_write() {
        let mut destinations = MockDestinationRepository::new();
        destinations
            .expect_list()
            .times(1)
            .returning(|_| Err(AppError::persistence("connection lost", json!({}))));

        let mut sink = MockReportSink::new();
        sink.expect_write().times(0);

        let exporter = Exporter::new(
            Arc::new(destinations),
            Arc::new(no_organizations()),
            Arc::new(sink),
        );

        let result = exporter.run(&ExportJob::destinations_all()).await;
        assert!(matches!(result.unwrap_err(), AppError::Persistence { .. }));
    }

    #[tokio::test]
    async fn test_batch_isolates_failures() {
        let mut destinations = MockDestinationRepository::new();
        destinations.expect_list().returning(|filter| {
            if filter.country == Facet::Only(Country::Malaysia) {
                Err(AppError::persistence("connection lost", json!({})))
            } else {
                Ok(vec![])
            }
        });

        let mut sink = MockReportSink::new();
        sink.expect_write()
            .withf(|name, _| name != "malaysiaDestination.txt")
            .times(3)
            .returning(|_, _| Ok(()));

        let exporter = Exporter::new(
            Arc::new(destinations),
            Arc::new(no_organizations()),
            Arc::new(sink),
        );

        let outcomes = exporter.run_batch(&ExportJob::standard()).await;

        assert_eq!(outcomes.len(), 4);
        let failed: Vec<_> = outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(failed, vec!["destinations-malaysia"]);
    }

    #[tokio::test]
    async fn test_batch_continues_after_sink_failure() {
        let mut sink = MockReportSink::new();
        sink.expect_write().returning(|name, _| {
            if name == "singaporeDestination.txt" {
                Err(AppError::sink("disk full", json!({})))
            } else {
                Ok(())
            }
        });

        let exporter = Exporter::new(
            Arc::new(mixed_destinations()),
            Arc::new(no_organizations()),
            Arc::new(sink),
        );

        let outcomes = exporter.run_batch(&ExportJob::standard()).await;

        assert!(!outcomes[0].is_success());
        assert!(outcomes[1..].iter().all(ExportOutcome::is_success));
        assert_eq!(outcomes[2].result.as_ref().unwrap().records, 5);
    }
}
