//! Basic usage example showing how to use the tandem meta-crate

use tandem::prelude::*;

fn main() -> anyhow::Result<()> {
    let config = TandemConfig {
        arrival_limits_queue1: Limits::new(1.0, 4.0),
        service_limits_queue1: Limits::new(3.0, 4.0),
        service_limits_queue2: Limits::new(2.0, 3.0),
        servers_queue1: 2,
        servers_queue2: 1,
        capacity_queue1: 3,
        capacity_queue2: 5,
        seeds: create_seeds(0.9920, 100_000),
    };

    // One run
    let run = TandemQueue::new(config.clone())?.run(SimTime::from(2.5));
    println!(
        "Single run: {} events, final time {}",
        run.events.len(),
        run.final_state.time
    );

    // Five replications, averaged
    let replications = run_replications(&config, &RunSettings::new(100_000))?;
    for summary in summarize(&replications, &config)? {
        println!("{}", summary.queue);
        for row in &summary.table.rows {
            println!("  {:>2}  {:>12.4}  {:>8.4}%", row.level, row.mean_time, row.probability);
        }
        println!("  TOTAL {:>10.4}", summary.table.total_time);
    }
    Ok(())
}
