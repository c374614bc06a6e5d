//! Command-line driver for batch replications.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tandem_core::config::default_base_seeds;
use tandem_core::{run_replications, RunSettings, TandemConfig};
use tandem_metrics::export::{export_json, export_results_text, export_states_text, Report};
use tandem_metrics::{summarize, QueueSummary};
use tracing::info;

/// Command-line arguments for the tandem-queue simulator.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct SimulatorCli {
    /// JSON file describing the network (limits, servers, capacities)
    #[arg(long)]
    pub config: PathBuf,

    /// Seeds drawn per replication
    #[arg(long)]
    pub draws: usize,

    /// Simulation time of the first arrival
    #[arg(long, default_value_t = 2.5)]
    pub start_time: f64,

    /// Base seed of one replication; repeat for more (defaults to five fixed seeds)
    #[arg(long = "seed")]
    pub seeds: Vec<f64>,

    /// Summary table output
    #[arg(long, default_value = "results.txt")]
    pub results: PathBuf,

    /// Per-replication final state output
    #[arg(long, default_value = "state_results.txt")]
    pub states: PathBuf,

    /// Optional JSON output with summaries and replications
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl SimulatorCli {
    pub fn settings(&self) -> RunSettings {
        RunSettings {
            base_seeds: if self.seeds.is_empty() {
                default_base_seeds()
            } else {
                self.seeds.clone()
            },
            draws_per_replication: self.draws,
            start_time: self.start_time,
        }
    }
}

/// Load the configuration, run every replication, and write the outputs.
pub fn run(cli: &SimulatorCli) -> anyhow::Result<Vec<QueueSummary>> {
    let raw = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("reading {}", cli.config.display()))?;
    let config = TandemConfig::from_json_str(&raw)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let replications = run_replications(&config, &cli.settings())?;
    let summaries = summarize(&replications, &config)?;
    let report = Report {
        summaries: &summaries,
        replications: &replications,
    };

    export_results_text(&report, &cli.results)
        .with_context(|| format!("writing {}", cli.results.display()))?;
    export_states_text(&report, &cli.states)
        .with_context(|| format!("writing {}", cli.states.display()))?;
    if let Some(path) = &cli.json {
        export_json(&report, path, true).with_context(|| format!("writing {}", path.display()))?;
    }

    info!(
        results = %cli.results.display(),
        states = %cli.states.display(),
        "Results written"
    );
    Ok(summaries)
}
