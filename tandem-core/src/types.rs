//! Core type definitions and newtypes for the simulation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for events in the simulation
///
/// Assigned by the scheduler in insertion order, so it doubles as the
/// tie-breaker between events scheduled for the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// One of the two stations of the tandem network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueId {
    Queue1,
    Queue2,
}

impl QueueId {
    pub const ALL: [QueueId; 2] = [QueueId::Queue1, QueueId::Queue2];

    /// 1-based station number, as used in reports
    pub const fn number(&self) -> usize {
        match self {
            QueueId::Queue1 => 1,
            QueueId::Queue2 => 2,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            QueueId::Queue1 => "queue1",
            QueueId::Queue2 => "queue2",
        }
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue {}", self.number())
    }
}
