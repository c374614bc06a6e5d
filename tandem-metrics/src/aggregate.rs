//! Averaging of replication results into occupancy probabilities.

use serde::{Deserialize, Serialize};
use tandem_core::{QueueId, Replication, ReplicationResult, TandemConfig};
use tracing::debug;

use crate::error::AggregateError;

/// Mean time spent at one occupancy level and its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub level: usize,
    pub mean_time: f64,
    /// Percentage of total time, 0 to 100
    pub probability: f64,
}

/// One row per occupancy level `0..=capacity` plus the TOTAL row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
    pub total_time: f64,
}

impl ResultTable {
    /// The TOTAL row: `(mean_total_time, 100)`
    pub fn total_row(&self) -> (f64, f64) {
        (self.total_time, 100.0)
    }

    pub fn capacity(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Time-average number of customers present
    pub fn mean_occupancy(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.level as f64 * row.probability / 100.0)
            .sum()
    }

    fn from_means(total_time: f64, level_times: &[f64]) -> Self {
        let rows = level_times
            .iter()
            .enumerate()
            .map(|(level, &mean_time)| ResultRow {
                level,
                mean_time,
                probability: percentage(mean_time, total_time),
            })
            .collect();
        Self { rows, total_time }
    }
}

/// Zero-length runs carry no occupancy information; every level reads 0%.
fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        100.0 * part / total
    }
}

/// Average `[total_time, t0, ..., t_capacity]` rows column-wise and convert
/// the means into a [`ResultTable`].
///
/// Columns past `capacity + 1` are ignored.
pub fn calculate_results(
    replications: &[Vec<f64>],
    capacity: usize,
) -> Result<ResultTable, AggregateError> {
    if replications.is_empty() {
        return Err(AggregateError::Empty);
    }
    let width = capacity + 2;
    if let Some((index, row)) = replications
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() < width)
    {
        return Err(AggregateError::ShortRow {
            index,
            expected: width,
            actual: row.len(),
        });
    }

    let count = replications.len() as f64;
    let means: Vec<f64> = (0..width)
        .map(|column| replications.iter().map(|row| row[column]).sum::<f64>() / count)
        .collect();

    debug!(
        replications = replications.len(),
        capacity,
        mean_total_time = means[0],
        "Aggregated replications"
    );
    Ok(ResultTable::from_means(means[0], &means[1..]))
}

/// Table for a single replication, without averaging.
pub fn calculate_single(result: &ReplicationResult) -> ResultTable {
    ResultTable::from_means(result.total_time, &result.time_in_state)
}

/// Aggregated table and mean losses for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSummary {
    pub queue: QueueId,
    pub table: ResultTable,
    pub mean_losses: f64,
}

/// Aggregate a batch of replications for both stations.
pub fn summarize(
    replications: &[Replication],
    config: &TandemConfig,
) -> Result<Vec<QueueSummary>, AggregateError> {
    QueueId::ALL
        .into_iter()
        .map(|queue| {
            let rows = tandem_core::rows_for(replications, queue);
            let table = calculate_results(&rows, config.capacity(queue))?;
            let mean_losses = replications
                .iter()
                .map(|replication| replication.losses.get(queue) as f64)
                .sum::<f64>()
                / replications.len() as f64;
            Ok(QueueSummary {
                queue,
                table,
                mean_losses,
            })
        })
        .collect()
}
