//! Result aggregation and export for tandem-queue simulations
//!
//! This crate turns the final time-in-state accumulations of independent
//! replications into per-level occupancy probabilities, and writes them out
//! as text tables or JSON.

pub mod aggregate;
pub mod error;
pub mod export;

pub use aggregate::{calculate_results, calculate_single, summarize, QueueSummary, ResultRow, ResultTable};
pub use error::{AggregateError, ExportError};
pub use export::{Report, ResultsExporter};
