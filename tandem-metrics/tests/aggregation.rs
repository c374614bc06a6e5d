use tandem_core::{rows_for, run_replications, Limits, QueueId, RunSettings, TandemConfig};
use tandem_metrics::export::{export_json, export_results_text, export_states_text, Report};
use tandem_metrics::{calculate_results, calculate_single, summarize};

fn network() -> TandemConfig {
    TandemConfig {
        arrival_limits_queue1: Limits::new(1.0, 4.0),
        service_limits_queue1: Limits::new(3.0, 4.0),
        service_limits_queue2: Limits::new(2.0, 3.0),
        servers_queue1: 2,
        servers_queue2: 1,
        capacity_queue1: 3,
        capacity_queue2: 5,
        seeds: Vec::new(),
    }
}

#[test]
fn two_replications_average_to_even_split() {
    let table = calculate_results(&[vec![10.0, 6.0, 4.0], vec![10.0, 4.0, 6.0]], 1).unwrap();

    let rows: Vec<_> = table
        .rows
        .iter()
        .map(|row| (row.level, row.mean_time, row.probability))
        .collect();
    assert_eq!(rows, vec![(0, 5.0, 50.0), (1, 5.0, 50.0)]);
    assert_eq!(table.total_row(), (10.0, 100.0));
}

#[test]
fn probabilities_sum_to_one_hundred() {
    let config = network();
    let replications = run_replications(&config, &RunSettings::new(5_000)).unwrap();

    for queue in QueueId::ALL {
        let table =
            calculate_results(&rows_for(&replications, queue), config.capacity(queue)).unwrap();
        let sum: f64 = table.rows.iter().map(|row| row.probability).sum();
        assert!((sum - 100.0).abs() < 1e-6, "{queue}: {sum}");
        assert!(table.total_time > 0.0);
    }
}

#[test]
fn single_replication_matches_one_row_aggregate() {
    let config = network();
    let replications = run_replications(&config, &RunSettings::new(500)).unwrap();
    let result = replications[0].result(QueueId::Queue1);

    let single = calculate_single(result);
    let aggregated = calculate_results(&[result.as_row()], config.capacity_queue1).unwrap();
    assert_eq!(single, aggregated);
}

#[test]
fn batch_run_writes_all_outputs() {
    let config = network();
    let replications = run_replications(&config, &RunSettings::new(1_000)).unwrap();
    let summaries = summarize(&replications, &config).unwrap();
    let report = Report {
        summaries: &summaries,
        replications: &replications,
    };

    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.txt");
    let states = dir.path().join("state_results.txt");
    let json = dir.path().join("results.json");

    export_results_text(&report, &results).unwrap();
    export_states_text(&report, &states).unwrap();
    export_json(&report, &json, false).unwrap();

    let results = std::fs::read_to_string(results).unwrap();
    assert!(results.starts_with("Queue 1\n"));
    assert!(results.contains("Queue 2\n"));
    assert_eq!(results.matches("TOTAL").count(), 2);

    let states = std::fs::read_to_string(states).unwrap();
    // Title, two rules and one row per replication, for each queue.
    let non_empty = states.lines().filter(|line| !line.is_empty()).count();
    assert_eq!(non_empty, 2 * (3 + replications.len()));

    let json = std::fs::read_to_string(json).unwrap();
    assert!(!json.contains('\n'));
}
