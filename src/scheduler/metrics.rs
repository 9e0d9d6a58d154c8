//! Schedule performance metrics.
//!
//! Pure reduction of a computed schedule into summary statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Total / Avg Flow Time | Sum / mean of job completion times |
//! | Total / Avg Waiting Time | Flow time minus processing time |
//! | Utilization | Busy time / makespan per machine (%) |
//! | Avg Utilization | Mean of per-machine utilization (%) |
//!
//! Averages over an empty job set are 0.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleResult, Time};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// Latest completion time.
    pub makespan: Time,
    /// Sum of flow times.
    pub total_flow_time: Time,
    /// Mean flow time.
    pub average_flow_time: f64,
    /// Sum of waiting times.
    pub total_waiting_time: Time,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Utilization per machine in percent.
    pub machine_utilization: Vec<f64>,
    /// Mean machine utilization in percent.
    pub average_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule.
    ///
    /// The job count is the length of the schedule's job sequence.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let job_count = result.job_sequence.len();

        let average_waiting_time = if job_count == 0 {
            0.0
        } else {
            result.total_waiting_time as f64 / job_count as f64
        };

        let average_utilization = if result.machine_utilization.is_empty() {
            0.0
        } else {
            let sum: f64 = result.machine_utilization.iter().sum();
            sum / result.machine_utilization.len() as f64
        };

        Self {
            makespan: result.makespan,
            total_flow_time: result.total_flow_time,
            average_flow_time: result.average_flow_time,
            total_waiting_time: result.total_waiting_time,
            average_waiting_time,
            machine_utilization: result.machine_utilization.clone(),
            average_utilization,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_makespan: Time, min_utilization: f64) -> bool {
        self.makespan <= max_makespan && self.average_utilization >= min_utilization
    }
}
