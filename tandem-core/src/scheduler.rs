use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::event::{Event, EventKind};
use crate::time::SimTime;
use crate::types::EventId;

/// Entry type stored in the scheduler's priority queue.
///
/// Entries order by time, then by insertion sequence, so two events scheduled
/// for the same instant are popped in the order they were scheduled.
#[derive(Debug)]
pub struct EventEntry(Event);

impl EventEntry {
    pub fn time(&self) -> SimTime {
        self.0.time
    }

    pub fn event(&self) -> &Event {
        &self.0
    }
}

impl PartialEq for EventEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EventEntry {}

impl PartialOrd for EventEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the ordering for min-heap behavior in BinaryHeap
        other
            .0
            .time
            .cmp(&self.0.time)
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

/// Scheduler is used to keep the current time and information about the upcoming events.
///
/// Unlike a general-purpose engine, times given to [`Scheduler::schedule_at`]
/// are absolute: the tandem state machine always schedules relative to the
/// clock it has just advanced to, and passes the sum.
#[derive(Debug)]
pub struct Scheduler {
    next_event_id: u64,
    events: BinaryHeap<EventEntry>,
    clock: SimTime,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SimTime::zero())
    }
}

impl Scheduler {
    /// Create a scheduler whose clock reads `start`.
    pub fn new(start: SimTime) -> Self {
        Self {
            next_event_id: 0,
            events: BinaryHeap::new(),
            clock: start,
        }
    }

    /// Schedules an event of `kind` at absolute time `time`.
    pub fn schedule_at(&mut self, time: SimTime, kind: EventKind, duration: f64) -> EventId {
        self.next_event_id += 1;
        let id = EventId(self.next_event_id);
        self.events.push(EventEntry(Event {
            id,
            kind,
            time,
            duration,
        }));
        id
    }

    /// Schedules an event of `kind` at `self.time() + duration`.
    pub fn schedule(&mut self, kind: EventKind, duration: f64) -> EventId {
        let time = self.time() + duration;
        self.schedule_at(time, kind, duration)
    }

    /// Returns the current simulation time.
    #[must_use]
    pub fn time(&self) -> SimTime {
        self.clock
    }

    /// Returns a reference to the next scheduled event or `None` if none are left.
    pub fn peek(&self) -> Option<&Event> {
        self.events.peek().map(EventEntry::event)
    }

    /// Removes and returns the next scheduled event or `None` if none are left.
    ///
    /// The clock advances to the event's time.
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop().map(|EventEntry(event)| {
            self.clock = event.time;
            event
        })
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
