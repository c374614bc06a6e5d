//! Structured logging for tandem-queue simulation debugging
//!
//! # How to Control Terminal Logging Output
//!
//! ## 1. Use `init_detailed_simulation_logging()` (Recommended for debugging)
//! ```rust,no_run
//! use tandem_core::init_detailed_simulation_logging;
//! init_detailed_simulation_logging();
//! ```
//! Shows every event, draw and state change, pretty-printed.
//!
//! ## 2. Use `init_simulation_logging_with_level()` for specific levels
//! ```rust,no_run
//! use tandem_core::init_simulation_logging_with_level;
//! init_simulation_logging_with_level("debug");  // losses and replication summaries
//! ```
//!
//! ## 3. Use Environment Variables
//! ```bash
//! RUST_LOG=tandem_core::tandem=trace tandem-sim --config network.json --draws 1000
//! ```
//!
//! ## Log Level Guidelines:
//! - **TRACE**: Each dispatched event, each draw, each scheduled event
//! - **DEBUG**: Lost customers, draws from an exhausted seed sequence,
//!   per-replication summaries
//! - **INFO**: Run start and completion

use crate::time::SimTime;
use crate::types::EventId;
use tracing::{info, Span};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for the simulation with sensible defaults
pub fn init_simulation_logging() {
    init_simulation_logging_with_level("info")
}

/// Initialize logging with a specific level
///
/// `RUST_LOG`, when set, takes precedence over `level`. Calling this more
/// than once is harmless; later calls keep the first subscriber.
///
/// # Arguments
/// * `level` - Log level: "trace", "debug", "info", "warn", or "error"
pub fn init_simulation_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.to_string().into());

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if installed.is_ok() {
        info!("Simulation logging initialized at level: {}", level);
    }
}

/// Initialize logging with full event-level tracing
pub fn init_detailed_simulation_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "trace,tandem_core=trace,tandem_metrics=debug".into());

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .pretty(),
        )
        .with(filter)
        .try_init();

    if installed.is_ok() {
        info!("Detailed simulation logging initialized");
    }
}

/// Create a span for tracking simulation execution
pub fn simulation_span(name: &str) -> Span {
    tracing::info_span!("simulation", name = name)
}

/// Create a span for one seeded replication
pub fn replication_span(base_seed: f64) -> Span {
    tracing::debug_span!("replication", base_seed = base_seed)
}

/// Create a span for tracking event processing
pub fn event_span(event_id: EventId, event_type: &str, time: SimTime) -> Span {
    tracing::trace_span!("event",
        id = %event_id,
        event_type = event_type,
        time = %time
    )
}
