//! Simulation configuration
//!
//! [`TandemConfig`] describes the network; [`RunSettings`] describes how many
//! seeded replications to run and from where. Both load from JSON and are
//! validated once, before any simulation state exists.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::randomness::Limits;
use crate::types::QueueId;

/// Parameters of the two-station tandem network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TandemConfig {
    pub arrival_limits_queue1: Limits,
    pub service_limits_queue1: Limits,
    pub service_limits_queue2: Limits,
    pub servers_queue1: usize,
    pub servers_queue2: usize,
    pub capacity_queue1: usize,
    pub capacity_queue2: usize,
    /// Seed sequence consumed by the run; usually filled in per replication
    #[serde(default)]
    pub seeds: Vec<f64>,
}

impl TandemConfig {
    /// Decode and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Same configuration with a different seed sequence.
    #[must_use]
    pub fn with_seeds(&self, seeds: Vec<f64>) -> Self {
        Self {
            seeds,
            ..self.clone()
        }
    }

    pub fn servers(&self, queue: QueueId) -> usize {
        match queue {
            QueueId::Queue1 => self.servers_queue1,
            QueueId::Queue2 => self.servers_queue2,
        }
    }

    pub fn capacity(&self, queue: QueueId) -> usize {
        match queue {
            QueueId::Queue1 => self.capacity_queue1,
            QueueId::Queue2 => self.capacity_queue2,
        }
    }

    /// Check every precondition the state machine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, limits) in [
            ("arrival_limits_queue1", self.arrival_limits_queue1),
            ("service_limits_queue1", self.service_limits_queue1),
            ("service_limits_queue2", self.service_limits_queue2),
        ] {
            if !limits.is_valid() {
                return Err(ConfigError::InvalidLimits {
                    name,
                    lo: limits.lo,
                    hi: limits.hi,
                });
            }
        }

        for queue in QueueId::ALL {
            let servers = self.servers(queue);
            let capacity = self.capacity(queue);
            if servers == 0 {
                return Err(ConfigError::NoServers { queue });
            }
            if capacity == 0 {
                return Err(ConfigError::ZeroCapacity { queue });
            }
            if servers > capacity {
                return Err(ConfigError::ServersExceedCapacity {
                    queue,
                    servers,
                    capacity,
                });
            }
        }

        validate_seeds(&self.seeds)
    }
}

/// Replication settings for a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    /// One replication per base seed
    #[serde(default = "default_base_seeds")]
    pub base_seeds: Vec<f64>,
    /// Length of the seed sequence generated from each base seed
    pub draws_per_replication: usize,
    #[serde(default = "default_start_time")]
    pub start_time: f64,
}

impl RunSettings {
    pub fn new(draws_per_replication: usize) -> Self {
        Self {
            base_seeds: default_base_seeds(),
            draws_per_replication,
            start_time: default_start_time(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_time.is_finite() || self.start_time < 0.0 {
            return Err(ConfigError::InvalidStartTime(self.start_time));
        }
        validate_seeds(&self.base_seeds)
    }
}

pub fn default_base_seeds() -> Vec<f64> {
    vec![0.9920, 0.0001, 0.5530, 0.2760, 0.3397]
}

fn default_start_time() -> f64 {
    2.5
}

fn validate_seeds(seeds: &[f64]) -> Result<(), ConfigError> {
    match seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| !(0.0..1.0).contains(*seed))
    {
        Some((index, &value)) => Err(ConfigError::SeedOutOfRange { index, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TandemConfig {
        TandemConfig {
            arrival_limits_queue1: Limits::new(1.0, 2.0),
            service_limits_queue1: Limits::new(3.0, 4.0),
            service_limits_queue2: Limits::new(2.0, 3.0),
            servers_queue1: 2,
            servers_queue2: 1,
            capacity_queue1: 3,
            capacity_queue2: 5,
            seeds: vec![0.5],
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "arrival_limits_queue1": [1, 2],
            "service_limits_queue1": [3, 4],
            "service_limits_queue2": [2, 3],
            "servers_queue1": 2,
            "servers_queue2": 1,
            "capacity_queue1": 3,
            "capacity_queue2": 5,
            "seeds": [0.5]
        }"#;
        assert_eq!(TandemConfig::from_json_str(json).unwrap(), config());
    }

    #[test]
    fn test_seeds_default_to_empty() {
        let mut value = serde_json::to_value(config()).unwrap();
        value.as_object_mut().unwrap().remove("seeds");
        let decoded: TandemConfig = serde_json::from_value(value).unwrap();
        assert!(decoded.seeds.is_empty());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            TandemConfig::from_json_str("{\"servers_queue1\": 1}"),
            Err(ConfigError::Decode(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_limits() {
        let mut bad = config();
        bad.service_limits_queue2 = Limits::new(3.0, 2.0);
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::InvalidLimits {
                name: "service_limits_queue2",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_server_layout() {
        let mut bad = config();
        bad.servers_queue2 = 0;
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::NoServers { queue: QueueId::Queue2 })
        ));

        let mut bad = config();
        bad.servers_queue1 = 4;
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::ServersExceedCapacity {
                queue: QueueId::Queue1,
                servers: 4,
                capacity: 3
            })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_seed() {
        let bad = config().with_seeds(vec![0.2, 1.0]);
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::SeedOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_run_settings_defaults() {
        let settings: RunSettings =
            serde_json::from_str("{\"draws_per_replication\": 100}").unwrap();
        assert_eq!(settings, RunSettings::new(100));
        assert_eq!(settings.base_seeds.len(), 5);
        assert_eq!(settings.start_time, 2.5);
        assert!(settings.validate().is_ok());
    }
}
