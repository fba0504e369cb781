//! Tables, charts and renderings of experiment results

pub mod chart;
pub mod csv_log;
pub mod dot;
pub mod table;

use crate::experiment::{DemoOutcome, SweepRow};
use crate::mis::Algorithm;

use chart::{render_bar_chart, render_series, Series};
use table::render_table;

/// Running time and set size of each demonstration run.
pub fn demo_table(outcome: &DemoOutcome) -> String {
    let rows: Vec<Vec<String>> = outcome
        .runs
        .iter()
        .map(|run| {
            vec![
                run.algorithm.name().to_string(),
                format!("{:.8} seconds", run.elapsed.as_secs_f64()),
                run.independent_set.len().to_string(),
            ]
        })
        .collect();
    render_table(&["Algorithm", "Running Time", "Set Size"], &rows)
}

/// The running-time and set-size bar charts of the demonstration.
pub fn demo_charts(outcome: &DemoOutcome) -> String {
    let times: Vec<(String, f64)> = outcome
        .runs
        .iter()
        .map(|run| (run.algorithm.name().to_string(), run.elapsed.as_secs_f64()))
        .collect();
    let sizes: Vec<(String, f64)> = outcome
        .runs
        .iter()
        .map(|run| {
            (
                run.algorithm.name().to_string(),
                run.independent_set.len() as f64,
            )
        })
        .collect();
    format!(
        "{}\n\n{}",
        render_bar_chart("Algorithm Running Times", &times, 8, "seconds"),
        render_bar_chart("Found Set Size", &sizes, 0, "")
    )
}

/// Vertex counts and algorithms in the order they first appear in `rows`.
fn sweep_axes(rows: &[SweepRow]) -> (Vec<usize>, Vec<Algorithm>) {
    let mut xs: Vec<usize> = Vec::new();
    let mut algorithms: Vec<Algorithm> = Vec::new();
    for row in rows {
        if !xs.contains(&row.vertex_count) {
            xs.push(row.vertex_count);
        }
        if !algorithms.contains(&row.algorithm) {
            algorithms.push(row.algorithm);
        }
    }
    (xs, algorithms)
}

/// One series per algorithm, with `value` picked from each row.
pub fn sweep_series(rows: &[SweepRow], value: impl Fn(&SweepRow) -> f64) -> (Vec<usize>, Vec<Series>) {
    let (xs, algorithms) = sweep_axes(rows);
    let series = algorithms
        .iter()
        .map(|&algorithm| Series {
            name: algorithm.name().to_string(),
            values: xs
                .iter()
                .map(|&x| {
                    rows.iter()
                        .find(|r| r.vertex_count == x && r.algorithm == algorithm)
                        .map(&value)
                })
                .collect(),
        })
        .collect();
    (xs, series)
}

/// Average running time and average set size against the number of vertices.
pub fn sweep_charts(rows: &[SweepRow]) -> String {
    let (xs, times) = sweep_series(rows, |r| r.metrics.mean_time);
    let (_, sizes) = sweep_series(rows, |r| r.metrics.mean_size);
    format!(
        "{}\n\n{}",
        render_series(
            "Algorithm Running Time vs. Number of Vertices (seconds)",
            "Vertices",
            &xs,
            &times,
            8
        ),
        render_series(
            "Algorithm Set Size vs. Number of Vertices",
            "Vertices",
            &xs,
            &sizes,
            2
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{DemoRun, Metrics};
    use crate::graph::UndirectedGraph;
    use crate::mis::VertexSet;
    use std::time::Duration;

    fn row(vertex_count: usize, algorithm: Algorithm, mean_time: f64, mean_size: f64) -> SweepRow {
        SweepRow {
            vertex_count,
            algorithm,
            metrics: Metrics {
                mean_time,
                mean_size,
                trials: 1,
            },
        }
    }

    #[test]
    fn series_follow_row_order() {
        let rows = [
            row(100, Algorithm::Greedy, 1.0, 10.0),
            row(100, Algorithm::HighestDegree, 0.5, 9.0),
            row(200, Algorithm::Greedy, 4.0, 12.0),
            row(200, Algorithm::HighestDegree, 1.0, 11.0),
        ];
        let (xs, series) = sweep_series(&rows, |r| r.metrics.mean_time);
        assert_eq!(xs, vec![100, 200]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Greedy");
        assert_eq!(series[0].values, vec![Some(1.0), Some(4.0)]);
        assert_eq!(series[1].values, vec![Some(0.5), Some(1.0)]);

        let charts = sweep_charts(&rows);
        assert!(charts.contains("│ 200      │ 4.00000000 │ 1.00000000     │"));
        assert!(charts.contains("│ 100      │ 10.00  │ 9.00           │"));
    }

    #[test]
    fn missing_points_stay_empty() {
        let rows = [
            row(100, Algorithm::Greedy, 1.0, 10.0),
            row(200, Algorithm::HighestDegree, 1.0, 11.0),
        ];
        let (_, series) = sweep_series(&rows, |r| r.metrics.mean_size);
        assert_eq!(series[0].values, vec![Some(10.0), None]);
        assert_eq!(series[1].values, vec![None, Some(11.0)]);
    }

    #[test]
    fn demo_report_lists_each_run() {
        let outcome = DemoOutcome {
            graph: UndirectedGraph::path(3),
            edge_probability: 0.2,
            runs: vec![
                DemoRun {
                    algorithm: Algorithm::Greedy,
                    independent_set: VertexSet::from([0, 2]),
                    elapsed: Duration::from_micros(2),
                },
                DemoRun {
                    algorithm: Algorithm::HighestDegree,
                    independent_set: VertexSet::from([1]),
                    elapsed: Duration::from_micros(1),
                },
            ],
        };
        let table = demo_table(&outcome);
        assert!(table.contains("│ Greedy         │ 0.00000200 seconds │ 2        │"));
        assert!(table.contains("│ Highest Degree │ 0.00000100 seconds │ 1        │"));

        let charts = demo_charts(&outcome);
        assert!(charts.starts_with("Algorithm Running Times\n"));
        assert!(charts.contains("Found Set Size\n"));
        assert!(charts.contains(&format!("Greedy         │{} 2", "█".repeat(40))));
    }
}
