use clap::Parser;
use tandem::cli::{run, SimulatorCli};
use tandem_core::init_simulation_logging_with_level;

fn main() -> anyhow::Result<()> {
    let cli = SimulatorCli::parse();
    init_simulation_logging_with_level(&cli.log_level);

    let summaries = run(&cli)?;
    for summary in &summaries {
        println!(
            "{}: mean occupancy {:.4}, mean losses {:.4}",
            summary.queue,
            summary.table.mean_occupancy(),
            summary.mean_losses
        );
    }
    println!(
        "Results on files: {} | {}",
        cli.results.display(),
        cli.states.display()
    );
    Ok(())
}
