//! Export entry point: writes the four standard catalog reports.
//!
//! Takes no arguments. A failed report is logged and the remaining reports
//! are still written; the process only exits non-zero when startup fails.

use anyhow::{Context, Result};
use std::sync::Arc;

use cruise_catalog::config;
use cruise_catalog::export::{ExportJob, Exporter, FileSink};
use cruise_catalog::infrastructure::persistence::{
    Database, SqliteDestinationRepository, SqliteOrganizationRepository,
};
use cruise_catalog::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Invalid configuration")?;
    logging::init(&config);
    config.print_summary();

    let db = Database::connect(&config.database_url, config.create_if_missing)
        .await
        .context("Failed to open catalog store")?;
    db.migrate().await.context("Failed to apply migrations")?;

    let exporter = Exporter::new(
        Arc::new(SqliteDestinationRepository::new(db.pool())),
        Arc::new(SqliteOrganizationRepository::new(db.pool())),
        Arc::new(FileSink::new(config.export_dir.clone())),
    );

    let outcomes = exporter.run_batch(&ExportJob::standard()).await;
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();

    if failed == 0 {
        tracing::info!(jobs = outcomes.len(), "All exports written");
    } else {
        tracing::warn!(jobs = outcomes.len(), failed, "Some exports failed");
    }

    Ok(())
}
