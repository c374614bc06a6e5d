//! Export functionality for simulation results
//!
//! This module provides exporters that write aggregated tables and raw
//! replication results for inspection and analysis with external tools.

pub mod json;
pub mod text;

use crate::aggregate::QueueSummary;
use crate::error::ExportError;
use std::path::Path;
use tandem_core::Replication;

/// Everything a batch run produces.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub summaries: &'a [QueueSummary],
    pub replications: &'a [Replication],
}

/// Trait for exporting results to different formats
pub trait ResultsExporter {
    /// Export results to the configured destination
    fn export(&self, report: &Report<'_>) -> Result<(), ExportError>;
}

/// Write the per-queue summary tables as plain text
///
/// # Example
/// ```no_run
/// use tandem_metrics::export::{export_results_text, Report};
///
/// let report = Report { summaries: &[], replications: &[] };
/// export_results_text(&report, "results.txt").unwrap();
/// ```
pub fn export_results_text(report: &Report<'_>, path: impl AsRef<Path>) -> Result<(), ExportError> {
    text::TextTableExporter::new(path.as_ref()).export(report)
}

/// Write each replication's final state rows as plain text
pub fn export_states_text(report: &Report<'_>, path: impl AsRef<Path>) -> Result<(), ExportError> {
    text::StateTableExporter::new(path.as_ref()).export(report)
}

/// Write the whole report as JSON
pub fn export_json(
    report: &Report<'_>,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ExportError> {
    json::JsonExporter::new(path.as_ref(), pretty).export(report)
}
