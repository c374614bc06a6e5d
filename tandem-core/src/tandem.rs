//! The tandem-queue state machine and its event loop.
//!
//! Two stations in series: customers arrive at queue 1, are served, pass to
//! queue 2, and leave after a second service. Each station has a number of
//! servers and a capacity (customers in service plus waiting); an arrival to a
//! full station is lost.
//!
//! A run is driven entirely by its seed sequence. Every arrival schedules the
//! next one, so the pending-event set is never empty, and the loop stops once
//! the last seed has been drawn.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::config::TandemConfig;
use crate::error::ConfigError;
use crate::event::{Event, EventKind};
use crate::logging::{event_span, simulation_span};
use crate::randomness::{Limits, SeedCursor};
use crate::replication::ReplicationResult;
use crate::scheduler::Scheduler;
use crate::state_log::StateLog;
use crate::time::SimTime;
use crate::types::QueueId;

/// Queue lengths and the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationState {
    pub queue1: usize,
    pub queue2: usize,
    pub time: SimTime,
}

impl SimulationState {
    pub fn len(&self, queue: QueueId) -> usize {
        match queue {
            QueueId::Queue1 => self.queue1,
            QueueId::Queue2 => self.queue2,
        }
    }
}

/// Customers turned away at a full station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Losses {
    /// External arrivals rejected by queue 1
    pub queue1: u64,
    /// Customers leaving queue 1 while queue 2 was full
    pub queue2: u64,
}

impl Losses {
    pub fn get(&self, queue: QueueId) -> u64 {
        match queue {
            QueueId::Queue1 => self.queue1,
            QueueId::Queue2 => self.queue2,
        }
    }

    fn record(&mut self, queue: QueueId) {
        match queue {
            QueueId::Queue1 => self.queue1 += 1,
            QueueId::Queue2 => self.queue2 += 1,
        }
        metrics::counter!("tandem_losses_total", "queue" => queue.as_str()).increment(1);
    }
}

/// Everything a finished run leaves behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TandemRun {
    pub start_time: SimTime,
    pub final_state: SimulationState,
    pub queue1_log: StateLog,
    pub queue2_log: StateLog,
    /// Dispatched events, in dispatch order
    pub events: Vec<Event>,
    pub draws: usize,
    pub losses: Losses,
}

impl TandemRun {
    pub fn log(&self, queue: QueueId) -> &StateLog {
        match queue {
            QueueId::Queue1 => &self.queue1_log,
            QueueId::Queue2 => &self.queue2_log,
        }
    }

    /// Elapsed simulation time from the start to the last dispatched event
    pub fn elapsed(&self) -> f64 {
        self.final_state.time - self.start_time
    }

    /// Final accumulation for one station.
    pub fn result(&self, queue: QueueId) -> ReplicationResult {
        ReplicationResult {
            total_time: self.elapsed(),
            time_in_state: self.log(queue).last().time_in_state.clone(),
        }
    }
}

/// Seeded tandem-queue simulator.
///
/// Owns the network state and the seed cursor for the duration of one run.
#[derive(Debug, Clone)]
pub struct TandemQueue {
    config: TandemConfig,
    state: SimulationState,
    cursor: SeedCursor,
    losses: Losses,
}

impl TandemQueue {
    /// Validate `config` and build an idle network that will draw from
    /// `config.seeds`.
    pub fn new(config: TandemConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cursor = SeedCursor::new(config.seeds.clone());
        Ok(Self {
            config,
            state: SimulationState::default(),
            cursor,
            losses: Losses::default(),
        })
    }

    pub fn config(&self) -> &TandemConfig {
        &self.config
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Run until the seed sequence is exhausted.
    ///
    /// The clock starts at `start_time`, where the first arrival is scheduled
    /// without consuming a seed.
    pub fn run(mut self, start_time: SimTime) -> TandemRun {
        let span = simulation_span("tandem");
        let _guard = span.enter();

        self.state.time = start_time;
        let mut scheduler = Scheduler::new(start_time);
        let mut queue1_log = StateLog::new(
            self.config.capacity_queue1,
            self.state.queue1,
            self.state.queue2,
            start_time,
        );
        let mut queue2_log = StateLog::new(
            self.config.capacity_queue2,
            self.state.queue1,
            self.state.queue2,
            start_time,
        );
        let mut events = Vec::new();

        scheduler.schedule_at(start_time, EventKind::ArrivalQ1, 0.0);
        info!(
            start_time = %start_time,
            seeds = self.cursor.len(),
            "Starting tandem simulation"
        );

        while !self.cursor.is_exhausted() {
            let Some(event) = scheduler.pop() else {
                break;
            };
            let _event_guard = event_span(event.id, event.kind.as_str(), event.time).entered();

            let previous_time = self.state.time;
            let previous = (self.state.queue1, self.state.queue2);
            self.state.time = event.time;

            self.handle_event(&event, &mut scheduler);

            let lengths = (self.state.queue1, self.state.queue2);
            queue1_log.record(event.kind, lengths, previous.0, previous_time, event.time);
            queue2_log.record(event.kind, lengths, previous.1, previous_time, event.time);
            metrics::counter!("tandem_events_total", "kind" => event.kind.as_str()).increment(1);
            events.push(event);
        }

        info!(
            final_time = %self.state.time,
            events = events.len(),
            pending = scheduler.len(),
            lost_queue1 = self.losses.queue1,
            lost_queue2 = self.losses.queue2,
            "Tandem simulation completed"
        );

        TandemRun {
            start_time,
            final_state: self.state,
            queue1_log,
            queue2_log,
            events,
            draws: self.cursor.consumed(),
            losses: self.losses,
        }
    }

    fn handle_event(&mut self, event: &Event, scheduler: &mut Scheduler) {
        match event.kind {
            EventKind::ArrivalQ1 => self.handle_arrival_queue1(scheduler),
            EventKind::ServiceQ2 => self.handle_service_queue2(scheduler),
            EventKind::PassageQ1ToQ2 => self.handle_passage_queue1_to_queue2(scheduler),
        }
        trace!(
            kind = %event.kind,
            queue1 = self.state.queue1,
            queue2 = self.state.queue2,
            "Event handled"
        );
    }

    fn handle_arrival_queue1(&mut self, scheduler: &mut Scheduler) {
        if self.state.queue1 < self.config.capacity_queue1 {
            self.state.queue1 += 1;
            if self.state.queue1 <= self.config.servers_queue1 {
                self.schedule(scheduler, EventKind::PassageQ1ToQ2, self.config.service_limits_queue1);
            }
        } else {
            debug!(time = %self.state.time, "Arrival lost at full queue 1");
            self.losses.record(QueueId::Queue1);
        }
        self.schedule(scheduler, EventKind::ArrivalQ1, self.config.arrival_limits_queue1);
    }

    fn handle_service_queue2(&mut self, scheduler: &mut Scheduler) {
        self.state.queue2 = self.state.queue2.saturating_sub(1);
        if self.state.queue2 > 0 {
            self.schedule(scheduler, EventKind::ServiceQ2, self.config.service_limits_queue2);
        }
    }

    fn handle_passage_queue1_to_queue2(&mut self, scheduler: &mut Scheduler) {
        self.state.queue1 = self.state.queue1.saturating_sub(1);
        if self.state.queue1 >= self.config.servers_queue1 {
            self.schedule(scheduler, EventKind::PassageQ1ToQ2, self.config.service_limits_queue1);
        }
        if self.state.queue2 < self.config.capacity_queue2 {
            self.state.queue2 += 1;
            if self.state.queue2 <= self.config.servers_queue2 {
                self.schedule(scheduler, EventKind::ServiceQ2, self.config.service_limits_queue2);
            }
        } else {
            debug!(time = %self.state.time, "Passage lost at full queue 2");
            self.losses.record(QueueId::Queue2);
        }
    }

    fn schedule(&mut self, scheduler: &mut Scheduler, kind: EventKind, limits: Limits) {
        let duration = self.cursor.draw(&limits);
        let id = scheduler.schedule_at(self.state.time + duration, kind, duration);
        trace!(%id, %kind, duration, "Event scheduled");
    }
}
