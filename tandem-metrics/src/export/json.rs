//! JSON export for results
//!
//! Exports the summary tables and every replication in structured JSON
//! suitable for programmatic consumption.

use crate::aggregate::QueueSummary;
use crate::error::ExportError;
use crate::export::{Report, ResultsExporter};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tandem_core::Replication;

/// JSON exporter for batch results
#[derive(Debug)]
pub struct JsonExporter {
    path: PathBuf,
    pretty: bool,
}

impl JsonExporter {
    /// Create a new JSON exporter
    ///
    /// # Arguments
    /// * `path` - Output file path
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn new(path: &Path, pretty: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            pretty,
        }
    }
}

impl ResultsExporter for JsonExporter {
    fn export(&self, report: &Report<'_>) -> Result<(), ExportError> {
        let export_data = ExportData {
            summaries: report.summaries,
            replications: report.replications,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&export_data)?
        } else {
            serde_json::to_string(&export_data)?
        };

        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ExportData<'a> {
    summaries: &'a [QueueSummary],
    replications: &'a [Replication],
}
