//! # Tandem - seeded tandem-queue simulation
//!
//! A deterministic, replayable discrete-event simulator for two queues in
//! series, plus the aggregation of independent replications into occupancy
//! probabilities.
//!
//! ## Crates
//!
//! - [`core`]: clock, scheduler, seed sequences, the tandem state machine,
//!   occupancy logs and parallel replications
//! - [`metrics`]: aggregation into result tables and text/JSON export
//!
//! The `tandem-sim` binary wires both together from a JSON configuration.

pub use tandem_core as core;

pub use tandem_metrics as metrics;

pub mod cli;

// Convenience re-exports of commonly used items
pub mod prelude {
    //! Commonly used types and functions

    pub use tandem_core::{
        create_seeds, run_replications, Limits, QueueId, RunSettings, SimTime, TandemConfig,
        TandemQueue, TandemRun,
    };

    pub use tandem_metrics::{calculate_results, summarize, QueueSummary, ResultTable};
}
