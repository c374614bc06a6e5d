//! Plain-text table export
//!
//! Two files, one section per queue:
//! - the summary (`State | Accumulated Time | Probability (%)`, then TOTAL)
//! - the raw final rows of every replication (`total, t0, t1, ...`)

use crate::aggregate::QueueSummary;
use crate::error::ExportError;
use crate::export::{Report, ResultsExporter};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tandem_core::{QueueId, Replication};

const SUMMARY_HEADERS: [&str; 3] = ["State", "Accumulated Time", "Probability (%)"];

/// Writes the aggregated summary tables
#[derive(Debug)]
pub struct TextTableExporter {
    path: PathBuf,
}

impl TextTableExporter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ResultsExporter for TextTableExporter {
    fn export(&self, report: &Report<'_>) -> Result<(), ExportError> {
        fs::write(&self.path, render_summaries(report.summaries))?;
        Ok(())
    }
}

/// Writes the final state rows of each replication
#[derive(Debug)]
pub struct StateTableExporter {
    path: PathBuf,
}

impl StateTableExporter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ResultsExporter for StateTableExporter {
    fn export(&self, report: &Report<'_>) -> Result<(), ExportError> {
        fs::write(&self.path, render_states(report.replications))?;
        Ok(())
    }
}

/// Render all summary tables, one section per queue.
pub fn render_summaries(summaries: &[QueueSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        let mut rows: Vec<Vec<String>> = summary
            .table
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.level.to_string(),
                    format_number(row.mean_time),
                    format_number(row.probability),
                ]
            })
            .collect();
        let (total_time, total_probability) = summary.table.total_row();
        rows.push(vec![
            "TOTAL".to_string(),
            format_number(total_time),
            format_number(total_probability),
        ]);

        let _ = writeln!(out, "{}", summary.queue);
        out.push_str(&tabulate(Some(&SUMMARY_HEADERS[..]), &rows));
        let _ = writeln!(out, "Lost customers (mean): {}", format_number(summary.mean_losses));
        out.push('\n');
    }
    out
}

/// Render the `[total_time, t0, ..., t_capacity]` row of every replication.
pub fn render_states(replications: &[Replication]) -> String {
    let mut out = String::new();
    for queue in QueueId::ALL {
        let rows: Vec<Vec<String>> = replications
            .iter()
            .map(|replication| {
                replication
                    .result(queue)
                    .as_row()
                    .into_iter()
                    .map(format_number)
                    .collect()
            })
            .collect();
        let _ = writeln!(out, "{queue}");
        out.push_str(&tabulate(None, &rows));
    }
    out.push('\n');
    out
}

fn format_number(value: f64) -> String {
    format!("{value:.4}")
}

/// Column-aligned table: first column left-aligned, the rest right-aligned.
/// Without headers the body is framed by dashed rules.
fn tabulate(headers: Option<&[&str]>, rows: &[Vec<String>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(headers.map(|h| h.len()))
        .max()
        .unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for (column, width) in widths.iter_mut().enumerate() {
        let header = headers.and_then(|h| h.get(column)).map_or(0, |h| h.len());
        let cells = rows
            .iter()
            .filter_map(|row| row.get(column))
            .map(String::len)
            .max()
            .unwrap_or(0);
        *width = header.max(cells);
    }

    let rule = widths
        .iter()
        .map(|&width| "-".repeat(width))
        .collect::<Vec<_>>()
        .join("  ");

    let mut out = String::new();
    if let Some(headers) = headers {
        let _ = writeln!(out, "{}", render_line(headers.iter().copied(), &widths));
    }
    let _ = writeln!(out, "{rule}");
    for row in rows {
        let _ = writeln!(out, "{}", render_line(row.iter().map(String::as_str), &widths));
    }
    if headers.is_none() {
        let _ = writeln!(out, "{rule}");
    }
    out
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, &width))| {
            if column == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect();
    line.join("  ").trim_end().to_string()
}
