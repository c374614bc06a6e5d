//! Events of the tandem network

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::SimTime;
use crate::types::EventId;

/// The three event types that drive the tandem network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// External arrival at queue 1
    ArrivalQ1,
    /// Service completion (departure) at queue 2
    ServiceQ2,
    /// Service completion at queue 1, moving the customer into queue 2
    PassageQ1ToQ2,
}

impl EventKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventKind::ArrivalQ1 => "ARR1",
            EventKind::ServiceQ2 => "SERV2",
            EventKind::PassageQ1ToQ2 => "PASS1to2",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled event: what happens, when, and the drawn delay that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    pub time: SimTime,
    pub duration: f64,
}
