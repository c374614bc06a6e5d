//! Error types for the simulation

use thiserror::Error;

use crate::types::QueueId;

/// Configuration rejected before a simulation is constructed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name} limits: [{lo}, {hi}] (expected finite 0 <= lo <= hi)")]
    InvalidLimits { name: &'static str, lo: f64, hi: f64 },

    #[error("{queue} must have at least one server")]
    NoServers { queue: QueueId },

    #[error("{queue} must have a capacity of at least one")]
    ZeroCapacity { queue: QueueId },

    #[error("{queue} has {servers} servers but capacity {capacity}")]
    ServersExceedCapacity {
        queue: QueueId,
        servers: usize,
        capacity: usize,
    },

    #[error("Seed {value} at index {index} is outside [0, 1)")]
    SeedOutOfRange { index: usize, value: f64 },

    #[error("Invalid start time: {0} (expected finite and non-negative)")]
    InvalidStartTime(f64),

    #[error("Failed to decode configuration: {0}")]
    Decode(#[from] serde_json::Error),
}
