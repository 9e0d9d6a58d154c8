//! Schedule (solution) model.
//!
//! A schedule result is the complete placement of job operations on
//! machines, with the summary figures computed while it was built and
//! any non-fatal advisories raised along the way.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::{JobId, Time};

/// One atomic placement of a job on a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTask {
    /// Placed job.
    pub job_id: JobId,
    /// Machine number (1-based).
    pub machine_id: usize,
    /// Start time.
    pub start_time: Time,
    /// End time (`start_time + processing_time`).
    pub end_time: Time,
    /// Processing time on this machine.
    pub processing_time: Time,
}

impl ScheduleTask {
    /// Creates a task starting at `start_time` that runs for `processing_time`.
    pub fn new(job_id: JobId, machine_id: usize, start_time: Time, processing_time: Time) -> Self {
        Self {
            job_id,
            machine_id,
            start_time,
            end_time: start_time + processing_time,
            processing_time,
        }
    }

    /// Whether two tasks share any instant of time.
    ///
    /// Zero-length tasks never overlap.
    #[inline]
    pub fn overlaps(&self, other: &ScheduleTask) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

/// A computed schedule.
///
/// Created fresh by every scheduling call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// Placements in emission order.
    pub tasks: Vec<ScheduleTask>,
    /// Latest end time across all machines.
    pub makespan: Time,
    /// Aggregate flow time.
    pub total_flow_time: Time,
    /// Total flow time divided by the number of scheduled jobs.
    pub average_flow_time: f64,
    /// Aggregate waiting time.
    pub total_waiting_time: Time,
    /// Utilization per machine in percent (index 0 = machine 1).
    pub machine_utilization: Vec<f64>,
    /// Job visiting order used to build the schedule.
    pub job_sequence: Vec<JobId>,
    /// Non-fatal conditions raised while scheduling.
    pub advisories: Vec<Advisory>,
}

/// A non-fatal signal attached to a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// Kind of advisory.
    pub kind: AdvisoryKind,
    /// Human-readable description.
    pub message: String,
}

/// Classification of advisories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryKind {
    /// A rule with an optimality guarantee (Johnson: 2 machines) ran on a
    /// different machine count. The schedule is valid but may be suboptimal.
    NotOptimal { rule: String, machine_count: usize },
    /// A sequence referenced a job id absent from the job set; it was skipped.
    UnknownJob(JobId),
    /// The requested topology has no dedicated scheduler; FIFO flow-shop was used.
    TopologyFallback(String),
}

impl Advisory {
    /// Creates an optimality advisory for `rule`.
    pub fn not_optimal(rule: impl Into<String>, optimal_for: usize, machine_count: usize) -> Self {
        let rule = rule.into();
        Self {
            message: format!(
                "{rule} is only makespan-optimal for {optimal_for} machines, got {machine_count}"
            ),
            kind: AdvisoryKind::NotOptimal {
                rule,
                machine_count,
            },
        }
    }

    /// Creates an unknown-job advisory.
    pub fn unknown_job(job_id: JobId) -> Self {
        Self {
            kind: AdvisoryKind::UnknownJob(job_id),
            message: format!("Sequence references unknown job {job_id}; skipped"),
        }
    }

    /// Creates a topology fallback advisory.
    pub fn topology_fallback(topology: impl Into<String>) -> Self {
        let topology = topology.into();
        Self {
            message: format!("No dedicated scheduler for topology '{topology}'; used FIFO flow-shop"),
            kind: AdvisoryKind::TopologyFallback(topology),
        }
    }
}

impl ScheduleResult {
    /// Creates an empty result with zeroed utilization for `machine_count` machines.
    pub fn empty(machine_count: usize) -> Self {
        Self {
            machine_utilization: vec![0.0; machine_count],
            ..Self::default()
        }
    }

    /// Adds an advisory.
    pub fn add_advisory(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }

    /// Whether the result carries no advisories.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Whether any advisory of the given kind is attached.
    pub fn has_advisory(&self, kind: &AdvisoryKind) -> bool {
        self.advisories.iter().any(|a| &a.kind == kind)
    }

    /// Returns all tasks for a given job, in emission order.
    pub fn tasks_for_job(&self, job_id: JobId) -> Vec<&ScheduleTask> {
        self.tasks.iter().filter(|t| t.job_id == job_id).collect()
    }

    /// Returns all tasks on a given machine (1-based), in emission order.
    pub fn tasks_for_machine(&self, machine_id: usize) -> Vec<&ScheduleTask> {
        self.tasks
            .iter()
            .filter(|t| t.machine_id == machine_id)
            .collect()
    }

    /// Completion time of a job (latest end of its tasks).
    pub fn job_completion_time(&self, job_id: JobId) -> Option<Time> {
        self.tasks
            .iter()
            .filter(|t| t.job_id == job_id)
            .map(|t| t.end_time)
            .max()
    }

    /// Sum of processing times on a machine (1-based).
    pub fn machine_busy_time(&self, machine_id: usize) -> Time {
        self.tasks
            .iter()
            .filter(|t| t.machine_id == machine_id)
            .map(|t| t.processing_time)
            .sum()
    }

    /// Number of machines the result covers.
    pub fn machine_count(&self) -> usize {
        self.machine_utilization.len()
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Utilization in percent: `busy / makespan × 100`, 0 when makespan is 0.
pub(crate) fn utilization_percent(busy: Time, makespan: Time) -> f64 {
    if makespan > 0 {
        busy as f64 / makespan as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScheduleResult {
        let mut r = ScheduleResult::empty(2);
        r.tasks.push(ScheduleTask::new(1, 1, 0, 3));
        r.tasks.push(ScheduleTask::new(1, 2, 3, 5));
        r.tasks.push(ScheduleTask::new(2, 1, 3, 6));
        r.tasks.push(ScheduleTask::new(2, 2, 9, 2));
        r.makespan = 11;
        r.job_sequence = vec![1, 2];
        r
    }

    #[test]
    fn test_task_end_time() {
        let t = ScheduleTask::new(4, 2, 10, 7);
        assert_eq!(t.end_time, 17);
        assert_eq!(t.machine_id, 2);
    }

    #[test]
    fn test_task_overlap() {
        let a = ScheduleTask::new(1, 1, 0, 5);
        let b = ScheduleTask::new(2, 1, 5, 3);
        let c = ScheduleTask::new(3, 1, 4, 3);
        assert!(!a.overlaps(&b)); // touching
        assert!(a.overlaps(&c));
        assert!(!ScheduleTask::new(4, 1, 2, 0).overlaps(&a));
    }

    #[test]
    fn test_tasks_for_job_and_machine() {
        let r = sample_result();
        assert_eq!(r.tasks_for_job(1).len(), 2);
        assert_eq!(r.tasks_for_machine(1).len(), 2);
        assert!(r.tasks_for_job(99).is_empty());
    }

    #[test]
    fn test_job_completion_time() {
        let r = sample_result();
        assert_eq!(r.job_completion_time(1), Some(8));
        assert_eq!(r.job_completion_time(2), Some(11));
        assert_eq!(r.job_completion_time(3), None);
    }

    #[test]
    fn test_machine_busy_time() {
        let r = sample_result();
        assert_eq!(r.machine_busy_time(1), 9);
        assert_eq!(r.machine_busy_time(2), 7);
        assert_eq!(r.machine_busy_time(3), 0);
    }

    #[test]
    fn test_utilization_percent() {
        assert!((utilization_percent(5, 10) - 50.0).abs() < 1e-10);
        assert!((utilization_percent(5, 0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_result() {
        let r = ScheduleResult::empty(3);
        assert_eq!(r.task_count(), 0);
        assert_eq!(r.makespan, 0);
        assert_eq!(r.machine_count(), 3);
        assert!(r.is_clean());
    }

    #[test]
    fn test_advisory_factories() {
        let a = Advisory::not_optimal("JOHNSON", 2, 3);
        assert_eq!(
            a.kind,
            AdvisoryKind::NotOptimal {
                rule: "JOHNSON".into(),
                machine_count: 3
            }
        );
        assert!(a.message.contains("2 machines"));

        let b = Advisory::unknown_job(42);
        assert_eq!(b.kind, AdvisoryKind::UnknownJob(42));
        assert!(b.message.contains("42"));

        let c = Advisory::topology_fallback("job-shop");
        assert_eq!(c.kind, AdvisoryKind::TopologyFallback("job-shop".into()));

        let mut r = ScheduleResult::empty(1);
        r.add_advisory(b);
        assert!(!r.is_clean());
        assert!(r.has_advisory(&AdvisoryKind::UnknownJob(42)));
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let json = serde_json::to_string(&ScheduleTask::new(1, 2, 3, 4)).unwrap();
        assert!(json.contains("\"jobId\":1"));
        assert!(json.contains("\"machineId\":2"));
        assert!(json.contains("\"endTime\":7"));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"jobSequence\":[1,2]"));
        assert!(json.contains("\"totalFlowTime\":0"));
        assert!(json.contains("\"machineUtilization\":[0.0,0.0]"));
        assert!(!json.contains("job_sequence"));
    }
}
