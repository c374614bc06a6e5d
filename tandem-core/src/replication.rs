//! Independent seeded replications.
//!
//! Each replication expands one base seed into its own seed sequence and runs
//! a fresh [`TandemQueue`]. Replications share nothing, so they run on the
//! rayon pool; results come back in base-seed order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{RunSettings, TandemConfig};
use crate::error::ConfigError;
use crate::logging::replication_span;
use crate::randomness::create_seeds;
use crate::tandem::{Losses, TandemQueue, TandemRun};
use crate::time::SimTime;
use crate::types::QueueId;

/// Final time-in-state accumulation of one station in one replication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationResult {
    pub total_time: f64,
    /// Accumulated time per occupancy level `0..=capacity`
    pub time_in_state: Vec<f64>,
}

impl ReplicationResult {
    /// `[total_time, t0, t1, ..., t_capacity]`
    pub fn as_row(&self) -> Vec<f64> {
        std::iter::once(self.total_time)
            .chain(self.time_in_state.iter().copied())
            .collect()
    }

    pub fn capacity(&self) -> usize {
        self.time_in_state.len().saturating_sub(1)
    }
}

/// Both stations' results for one base seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replication {
    pub base_seed: f64,
    pub queue1: ReplicationResult,
    pub queue2: ReplicationResult,
    pub events: usize,
    pub losses: Losses,
}

impl Replication {
    pub fn result(&self, queue: QueueId) -> &ReplicationResult {
        match queue {
            QueueId::Queue1 => &self.queue1,
            QueueId::Queue2 => &self.queue2,
        }
    }

    fn from_run(base_seed: f64, run: &TandemRun) -> Self {
        Self {
            base_seed,
            queue1: run.result(QueueId::Queue1),
            queue2: run.result(QueueId::Queue2),
            events: run.events.len(),
            losses: run.losses,
        }
    }
}

/// Run one replication for `base_seed`.
pub fn run_replication(
    config: &TandemConfig,
    base_seed: f64,
    draws: usize,
    start_time: SimTime,
) -> Result<Replication, ConfigError> {
    let span = replication_span(base_seed);
    let _guard = span.enter();

    let queue = TandemQueue::new(config.with_seeds(create_seeds(base_seed, draws)))?;
    let run = queue.run(start_time);
    let replication = Replication::from_run(base_seed, &run);
    debug!(
        base_seed,
        events = replication.events,
        total_time = replication.queue1.total_time,
        "Replication finished"
    );
    Ok(replication)
}

/// Run one replication per base seed in parallel.
pub fn run_replications(
    config: &TandemConfig,
    settings: &RunSettings,
) -> Result<Vec<Replication>, ConfigError> {
    settings.validate()?;
    config.validate()?;
    let start_time = SimTime::from(settings.start_time);

    info!(
        replications = settings.base_seeds.len(),
        draws = settings.draws_per_replication,
        "Running replications"
    );

    settings
        .base_seeds
        .par_iter()
        .map(|&seed| run_replication(config, seed, settings.draws_per_replication, start_time))
        .collect()
}

/// Collect the result rows of one station across replications, ready for
/// aggregation.
pub fn rows_for(replications: &[Replication], queue: QueueId) -> Vec<Vec<f64>> {
    replications
        .iter()
        .map(|replication| replication.result(queue).as_row())
        .collect()
}
