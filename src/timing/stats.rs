//! Summary statistics over aggregated cold-run durations.
//!
//! Used for the `--summary` table; the JSON report itself carries the raw
//! per-run values.

use super::schema::SummaryNode;
use log::debug;

/// Statistics for one timer across all cold runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeStats {
    /// Number of runs
    pub count: usize,

    /// Mean duration
    pub mean: f64,

    /// Median duration (upper median for even counts)
    pub median: f64,

    /// Fastest run
    pub min: f64,

    /// Slowest run
    pub max: f64,

    /// Population standard deviation
    pub std_dev: f64,
}

impl TimeStats {
    /// Human-readable one-liner, for logging
    pub fn summary(&self) -> String {
        format!(
            "Runs: {} | Mean: {:.1} | Median: {:.1} | Min: {:.1} | Max: {:.1} | SD: {:.2}",
            self.count, self.mean, self.median, self.min, self.max, self.std_dev
        )
    }
}

/// Calculate statistics for a list of durations
///
/// **Public** - returns the default (all zero) for an empty list
pub fn calculate_stats(times: &[f64]) -> TimeStats {
    if times.is_empty() {
        return TimeStats::default();
    }

    let count = times.len();
    let mean = times.iter().sum::<f64>() / count as f64;

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let variance = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / count as f64;

    TimeStats {
        count,
        mean,
        median: sorted[count / 2],
        min: sorted[0],
        max: sorted[count - 1],
        std_dev: variance.sqrt(),
    }
}

/// Flatten a summary tree into `(path, stats)` rows, depth first
///
/// **Public** - paths are `;`-joined timer names, e.g. `layout;order`
pub fn flatten_stats(summary: &SummaryNode) -> Vec<(String, TimeStats)> {
    let mut rows = Vec::new();
    let mut stack: Vec<&str> = Vec::new();
    collect_rows(summary, &mut stack, &mut rows);

    debug!("Flattened {} timers", rows.len());
    rows
}

fn collect_rows<'a>(
    node: &'a SummaryNode,
    stack: &mut Vec<&'a str>,
    rows: &mut Vec<(String, TimeStats)>,
) {
    for (name, child) in &node.children {
        stack.push(name);
        let path = stack.join(";");
        let stats = calculate_stats(&child.times_f64());
        debug!("{}: {}", path, stats.summary());
        rows.push((path, stats));
        collect_rows(child, stack, rows);
        stack.pop();
    }
}

/// Render rows as an aligned text table
///
/// **Public** - used by the bench command's `--summary`
pub fn render_stats_table(rows: &[(String, TimeStats)]) -> String {
    let width = rows
        .iter()
        .map(|(path, _)| path.len())
        .max()
        .unwrap_or(0)
        .max("Timer".len());

    let mut out = format!(
        "{:<width$}  {:>10}  {:>10}  {:>10}  {:>10}  {:>8}\n",
        "Timer",
        "Mean",
        "Median",
        "Min",
        "Max",
        "SD",
        width = width
    );

    for (path, stats) in rows {
        out.push_str(&format!(
            "{:<width$}  {:>10.1}  {:>10.1}  {:>10.1}  {:>10.1}  {:>8.2}\n",
            path,
            stats.mean,
            stats.median,
            stats.min,
            stats.max,
            stats.std_dev,
            width = width
        ));
    }

    out
}
