//! Seeded discrete-event engine for a two-stage tandem queue.
//!
//! This crate provides the building blocks of a reproducible tandem-queue
//! simulation: a float simulation clock, a time-ordered event scheduler, a
//! deterministic seed sequence, the tandem state machine, and time-weighted
//! occupancy logs.
//!
//! # Architecture Overview
//!
//! - [`TandemQueue`]: owns the network state and the seed cursor, and runs the
//!   event loop until the seed sequence is exhausted.
//! - [`Scheduler`]: binary-heap event queue; events at equal times pop in
//!   insertion order.
//! - [`StateLog`]: per-station accumulation of time spent at each occupancy
//!   level.
//! - [`run_replications`]: independent seeded runs, in parallel.
//!
//! # Basic Usage
//!
//! ```rust
//! use tandem_core::{Limits, SimTime, TandemConfig, TandemQueue, create_seeds};
//!
//! let config = TandemConfig {
//!     arrival_limits_queue1: Limits::new(1.0, 4.0),
//!     service_limits_queue1: Limits::new(3.0, 4.0),
//!     service_limits_queue2: Limits::new(2.0, 3.0),
//!     servers_queue1: 2,
//!     servers_queue2: 1,
//!     capacity_queue1: 3,
//!     capacity_queue2: 5,
//!     seeds: create_seeds(0.9920, 1000),
//! };
//!
//! let run = TandemQueue::new(config)?.run(SimTime::from(2.5));
//! let occupancy = &run.queue1_log.last().time_in_state;
//! assert_eq!(occupancy.len(), 4);
//! # Ok::<(), tandem_core::ConfigError>(())
//! ```
//!
//! # Time Model
//!
//! All timing uses [`SimTime`], which represents simulation time (not wall-clock time).
//! Given the same configuration and seeds, every run produces the same event
//! trace and the same logs.

pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod randomness;
pub mod replication;
pub mod scheduler;
pub mod state_log;
pub mod tandem;
pub mod time;
pub mod types;

pub use config::{RunSettings, TandemConfig};
pub use error::ConfigError;
pub use event::{Event, EventKind};
pub use logging::{
    event_span, init_detailed_simulation_logging, init_simulation_logging,
    init_simulation_logging_with_level, replication_span, simulation_span,
};
pub use randomness::{create_seeds, Limits, SeedCursor};
pub use replication::{rows_for, run_replication, run_replications, Replication, ReplicationResult};
pub use scheduler::Scheduler;
pub use state_log::{StateLog, StateLogEntry};
pub use tandem::{Losses, SimulationState, TandemQueue, TandemRun};
pub use time::SimTime;
pub use types::{EventId, QueueId};
