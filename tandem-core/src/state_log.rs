//! Time-weighted occupancy log for one station.
//!
//! Each dispatched event appends an entry that carries forward the accumulated
//! time-in-state vector, adding the interval since the previous event to the
//! occupancy level that held during that interval.

use serde::{Deserialize, Serialize};

use crate::event::EventKind;
use crate::time::SimTime;

/// A snapshot of the network after one event, from one station's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateLogEntry {
    /// Event that produced this entry; `None` for the initial entry
    pub trigger: Option<EventKind>,
    pub queue1: usize,
    pub queue2: usize,
    pub time: SimTime,
    /// Accumulated time per occupancy level `0..=capacity`
    pub time_in_state: Vec<f64>,
}

impl StateLogEntry {
    /// Sum of all accumulated time
    pub fn accumulated(&self) -> f64 {
        self.time_in_state.iter().sum()
    }
}

/// Append-only log of [`StateLogEntry`] values for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateLog {
    capacity: usize,
    entries: Vec<StateLogEntry>,
}

impl StateLog {
    /// Start a log with an all-zero accumulation at `time`.
    pub fn new(capacity: usize, queue1: usize, queue2: usize, time: SimTime) -> Self {
        let initial = StateLogEntry {
            trigger: None,
            queue1,
            queue2,
            time,
            time_in_state: vec![0.0; capacity + 1],
        };
        Self {
            capacity,
            entries: vec![initial],
        }
    }

    /// Append an entry for `trigger`, crediting `now - previous_time` to
    /// `previous_level`.
    ///
    /// `previous_level` is clamped to the capacity; under the tandem transition
    /// rules it never exceeds it.
    pub fn record(
        &mut self,
        trigger: EventKind,
        (queue1, queue2): (usize, usize),
        previous_level: usize,
        previous_time: SimTime,
        now: SimTime,
    ) -> &StateLogEntry {
        let mut time_in_state = self.last().time_in_state.clone();
        time_in_state[previous_level.min(self.capacity)] += now - previous_time;
        self.entries.push(StateLogEntry {
            trigger: Some(trigger),
            queue1,
            queue2,
            time: now,
            time_in_state,
        });
        self.last()
    }

    pub fn last(&self) -> &StateLogEntry {
        // The log is created with one entry and never shrinks.
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[StateLogEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_entry() {
        let log = StateLog::new(2, 0, 0, SimTime::from(2.5));
        assert_eq!(log.len(), 1);
        let entry = log.last();
        assert_eq!(entry.trigger, None);
        assert_eq!(entry.time, SimTime::from(2.5));
        assert_eq!(entry.time_in_state, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_record_credits_previous_level() {
        let mut log = StateLog::new(2, 0, 0, SimTime::zero());
        log.record(
            EventKind::ArrivalQ1,
            (1, 0),
            0,
            SimTime::zero(),
            SimTime::from(1.5),
        );
        let entry = log.record(
            EventKind::ArrivalQ1,
            (2, 0),
            1,
            SimTime::from(1.5),
            SimTime::from(4.0),
        );

        assert_eq!(entry.trigger, Some(EventKind::ArrivalQ1));
        assert_eq!(entry.queue1, 2);
        assert_eq!(entry.time_in_state, vec![1.5, 2.5, 0.0]);
        assert_eq!(entry.accumulated(), 4.0);
        assert_eq!(log.len(), 3);
        // Earlier entries are untouched.
        assert_eq!(log.entries()[1].time_in_state, vec![1.5, 0.0, 0.0]);
    }
}
