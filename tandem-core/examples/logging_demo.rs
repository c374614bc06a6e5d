//! Demonstration of logging in tandem-core
//!
//! Runs a short tandem simulation with detailed logging so every scheduled
//! event, seed draw and loss shows up on stderr. Narrow it with e.g.
//! `RUST_LOG=tandem_core::tandem=debug`.

use tandem_core::{
    create_seeds, init_detailed_simulation_logging, Limits, QueueId, SimTime, TandemConfig,
    TandemQueue,
};
use tracing::info;

fn main() -> Result<(), tandem_core::ConfigError> {
    init_detailed_simulation_logging();

    let config = TandemConfig {
        arrival_limits_queue1: Limits::new(1.0, 2.0),
        service_limits_queue1: Limits::new(3.0, 6.0),
        service_limits_queue2: Limits::new(2.0, 4.0),
        servers_queue1: 1,
        servers_queue2: 1,
        capacity_queue1: 2,
        capacity_queue2: 2,
        seeds: create_seeds(0.2760, 40),
    };

    let run = TandemQueue::new(config)?.run(SimTime::from(2.5));

    for queue in QueueId::ALL {
        let result = run.result(queue);
        info!(
            queue = %queue,
            total_time = result.total_time,
            time_in_state = ?result.time_in_state,
            lost = run.losses.get(queue),
            "Queue summary"
        );
    }
    Ok(())
}
