//! JSON export of a scheduling run.
//!
//! The record bundles configuration, input jobs, summary results, and the
//! full task list. Field names are camelCase and stable.

use serde::{Deserialize, Serialize};

use crate::config::{Algorithm, ShopConfig, SystemType};
use crate::error::Result;
use crate::models::{Job, JobId, ScheduleResult, ScheduleTask, Time};
use crate::scheduler::ScheduleMetrics;

/// Exported configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfiguration {
    /// Shop topology.
    pub system_type: SystemType,
    /// Sequencing algorithm.
    pub algorithm: Algorithm,
    /// Number of machines.
    pub num_machines: usize,
    /// Number of jobs in the run.
    pub num_jobs: usize,
}

/// Exported results section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResults {
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
    /// Job visiting order.
    pub job_sequence: Vec<JobId>,
}

/// A complete export record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    /// Run configuration.
    pub configuration: ExportConfiguration,
    /// Input jobs.
    pub jobs: Vec<Job>,
    /// Summary results.
    pub results: ExportResults,
    /// Every placement in the schedule.
    pub tasks: Vec<ScheduleTask>,
}

impl ExportRecord {
    /// Builds a record from a finished run.
    ///
    /// `num_jobs` is the number of jobs actually passed in.
    pub fn new(
        config: &ShopConfig,
        jobs: &[Job],
        result: &ScheduleResult,
        metrics: &ScheduleMetrics,
    ) -> Self {
        Self {
            configuration: ExportConfiguration {
                system_type: config.system_type.clone(),
                algorithm: config.algorithm,
                num_machines: config.machine_count,
                num_jobs: jobs.len(),
            },
            jobs: jobs.to_vec(),
            results: ExportResults {
                makespan: metrics.makespan,
                total_flow_time: metrics.total_flow_time,
                average_flow_time: metrics.average_flow_time,
                total_waiting_time: metrics.total_waiting_time,
                average_waiting_time: metrics.average_waiting_time,
                machine_utilization: metrics.machine_utilization.clone(),
                average_utilization: metrics.average_utilization,
                job_sequence: result.job_sequence.clone(),
            },
            tasks: result.tasks.clone(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a record back from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Suggested file name: `schedule_{system}_{algorithm}_{timestamp}.json`.
    pub fn file_name(&self, timestamp: u64) -> String {
        format!(
            "schedule_{}_{}_{timestamp}.json",
            self.configuration.system_type, self.configuration.algorithm
        )
    }
}
