//! Determinism guardrail tests
//!
//! These tests are intended to detect accidental introduction of
//! non-determinism in event execution order for identical simulations.

use tandem_core::{
    create_seeds, run_replications, Limits, RunSettings, SimTime, TandemConfig, TandemQueue,
    TandemRun,
};

fn network(seeds: Vec<f64>) -> TandemConfig {
    TandemConfig {
        arrival_limits_queue1: Limits::new(1.0, 4.0),
        service_limits_queue1: Limits::new(3.0, 4.0),
        service_limits_queue2: Limits::new(2.0, 3.0),
        servers_queue1: 2,
        servers_queue2: 1,
        capacity_queue1: 3,
        capacity_queue2: 5,
        seeds,
    }
}

fn run(seed: f64, draws: usize) -> TandemRun {
    TandemQueue::new(network(create_seeds(seed, draws)))
        .unwrap()
        .run(SimTime::from(2.5))
}

#[test]
fn identical_inputs_produce_identical_runs() {
    let baseline = run(0.9920, 2_000);

    for _ in 0..10 {
        let next = run(0.9920, 2_000);
        assert_eq!(baseline, next);
    }
}

#[test]
fn identical_inputs_produce_identical_serialized_logs() {
    let a = serde_json::to_string(&run(0.5530, 500)).unwrap();
    let b = serde_json::to_string(&run(0.5530, 500)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_seed_is_consumed() {
    let run = run(0.2760, 1_000);
    assert_eq!(run.draws, 1_000);
}

#[test]
fn different_seeds_diverge() {
    let a = run(0.9920, 200);
    let b = run(0.2760, 200);
    assert_ne!(a.queue1_log.last(), b.queue1_log.last());
}

#[test]
fn replication_batches_are_reproducible() {
    let settings = RunSettings::new(1_000);
    let baseline = run_replications(&network(Vec::new()), &settings).unwrap();

    for _ in 0..5 {
        let next = run_replications(&network(Vec::new()), &settings).unwrap();
        assert_eq!(baseline, next);
    }
}
