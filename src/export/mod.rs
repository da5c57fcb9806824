//! Report export: fetch a filtered slice of a catalog, render it in the
//! fixed-column text format and hand it to a [`ReportSink`].
//!
//! ```text
//! ExportJob ──> Exporter::run ──> repository.list(filter)
//!                               └─> render_report ──> ReportSink::write
//! ```

pub mod formatter;
pub mod job;
pub mod sink;

pub use formatter::{COLUMN_SEPARATOR, ReportRecord, render_record, render_report};
pub use job::{ExportJob, ExportOutcome, ExportScope, ExportSummary, Exporter};
pub use sink::{FileSink, ReportSink};
