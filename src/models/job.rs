//! Job model.
//!
//! A job is a unit of work that visits machines in index order, spending
//! a fixed processing time on each.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// Job identifier. Unique within one scheduling run.
pub type JobId = u32;

/// Time in abstract integer units relative to the schedule start (t=0).
pub type Time = i64;

/// A job to be scheduled.
///
/// `processing_times[m]` is the time the job spends on machine `m`
/// (0-indexed, machine 0 is visited first). Parallel-machine scheduling
/// only reads the first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Display name.
    pub name: String,
    /// Processing time per machine, in visiting order.
    pub processing_times: Vec<Time>,
}

impl Job {
    /// Creates a job named `J{id}` with no processing times.
    pub fn new(id: JobId) -> Self {
        Self {
            id,
            name: format!("J{id}"),
            processing_times: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the per-machine processing times.
    pub fn with_processing_times(mut self, times: Vec<Time>) -> Self {
        self.processing_times = times;
        self
    }

    /// Processing time on the given machine (0-indexed).
    ///
    /// A missing entry reads as 0.
    #[inline]
    pub fn processing_time(&self, machine_index: usize) -> Time {
        self.processing_times
            .get(machine_index)
            .copied()
            .unwrap_or(0)
    }

    /// Sum of processing times across all machines.
    pub fn total_processing_time(&self) -> Time {
        self.processing_times.iter().sum()
    }

    /// Number of machines this job has times for.
    pub fn machine_count(&self) -> usize {
        self.processing_times.len()
    }
}
