//! Algorithm comparison.
//!
//! Runs every algorithm applicable to a topology on the same job set and
//! ranks the results by makespan. Each run is an independent dispatcher
//! call; none of them mutates the shared job set.

use serde::{Deserialize, Serialize};

use crate::config::{Algorithm, SystemType};
use crate::models::{Job, Time};
use crate::scheduler::{schedule, ScheduleMetrics};

/// One algorithm's outcome in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    /// Algorithm that produced this entry.
    pub algorithm: Algorithm,
    /// Resulting makespan.
    pub makespan: Time,
    /// Mean flow time.
    pub average_flow_time: f64,
    /// Mean machine utilization (%).
    pub average_utilization: f64,
    /// Makespan above the best entry, in percent of the best.
    pub gap_percent: f64,
    /// Whether this entry has the lowest makespan (ties are all best).
    pub is_best: bool,
}

/// Comparison of algorithms over one job set, in [`Algorithm::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// One entry per applicable algorithm.
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Lowest makespan across entries.
    pub fn best_makespan(&self) -> Option<Time> {
        self.entries.iter().map(|e| e.makespan).min()
    }

    /// Entries tied for the lowest makespan.
    pub fn best(&self) -> Vec<&ComparisonEntry> {
        self.entries.iter().filter(|e| e.is_best).collect()
    }

    /// Entry for a given algorithm.
    pub fn entry(&self, algorithm: Algorithm) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Whether the comparison has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Algorithms that make sense for a topology.
///
/// Johnson and NEH are flow-shop only.
pub fn applicable_algorithms(system_type: &SystemType) -> Vec<Algorithm> {
    Algorithm::ALL
        .iter()
        .copied()
        .filter(|a| *system_type == SystemType::FlowShop || !a.is_flow_shop_only())
        .collect()
}

/// Runs every applicable algorithm and ranks by makespan.
///
/// An empty job set yields an empty comparison.
pub fn compare_algorithms(
    jobs: &[Job],
    machine_count: usize,
    system_type: &SystemType,
) -> Comparison {
    if jobs.is_empty() {
        return Comparison::default();
    }

    let runs: Vec<(Algorithm, ScheduleMetrics)> = applicable_algorithms(system_type)
        .into_iter()
        .map(|algorithm| {
            let result = schedule(jobs, machine_count, system_type, algorithm);
            (algorithm, ScheduleMetrics::calculate(&result))
        })
        .collect();

    let best = runs.iter().map(|(_, m)| m.makespan).min().unwrap_or(0);

    let entries = runs
        .into_iter()
        .map(|(algorithm, metrics)| ComparisonEntry {
            algorithm,
            makespan: metrics.makespan,
            average_flow_time: metrics.average_flow_time,
            average_utilization: metrics.average_utilization,
            gap_percent: gap_percent(metrics.makespan, best),
            is_best: metrics.makespan == best,
        })
        .collect();

    Comparison { entries }
}

fn gap_percent(makespan: Time, best: Time) -> f64 {
    if best > 0 {
        (makespan - best) as f64 / best as f64 * 100.0
    } else {
        0.0
    }
}
