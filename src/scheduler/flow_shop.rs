//! Permutation flow-shop simulator.
//!
//! # Algorithm
//!
//! Jobs are processed strictly in sequence order; each job visits machines
//! 0..m in index order:
//!
//! ```text
//! start = max(machine_free[m], job_available)
//! end   = start + p[job][m]
//! machine_free[m] = job_available = end
//! ```
//!
//! The `max` enforces both constraints at once: a machine handles one job
//! at a time, and a job cannot start on machine m+1 before leaving m.
//!
//! # Complexity
//! O(n * m) where n=sequence length, m=machines.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 6.1: Flow Shops with Unlimited Intermediate Storage

use std::collections::HashMap;

use tracing::warn;

use crate::dispatching::SequencingRule;
use crate::models::{utilization_percent, Advisory, Job, JobId, ScheduleResult, ScheduleTask, Time};

/// Simulates a permutation flow shop for a fixed job order.
///
/// Ids in `sequence` that are not present in `jobs` are skipped and
/// reported as [`AdvisoryKind::UnknownJob`](crate::models::AdvisoryKind::UnknownJob).
/// Flow and waiting figures cover the scheduled jobs only. A missing
/// processing-time entry reads as 0.
///
/// Deterministic: identical inputs produce identical results.
pub fn simulate(jobs: &[Job], sequence: &[JobId], machine_count: usize) -> ScheduleResult {
    let mut result = ScheduleResult::empty(machine_count);
    if machine_count == 0 {
        return result;
    }

    // First occurrence wins on duplicate ids
    let mut by_id: HashMap<JobId, &Job> = HashMap::with_capacity(jobs.len());
    for job in jobs {
        by_id.entry(job.id).or_insert(job);
    }

    let mut machine_free: Vec<Time> = vec![0; machine_count];
    let mut machine_busy: Vec<Time> = vec![0; machine_count];
    result.tasks.reserve(sequence.len() * machine_count);

    for &job_id in sequence {
        let Some(job) = by_id.get(&job_id) else {
            warn!(job_id, "sequence references unknown job; skipping");
            result.add_advisory(Advisory::unknown_job(job_id));
            continue;
        };

        let mut job_available: Time = 0;
        let mut job_work: Time = 0;

        for m in 0..machine_count {
            let processing = job.processing_time(m);
            let start = machine_free[m].max(job_available);
            let task = ScheduleTask::new(job.id, m + 1, start, processing);

            machine_free[m] = task.end_time;
            machine_busy[m] += processing;
            job_available = task.end_time;
            job_work += processing;
            result.tasks.push(task);
        }

        result.total_flow_time += job_available;
        result.total_waiting_time += job_available - job_work;
        result.job_sequence.push(job_id);
    }

    result.makespan = machine_free.iter().copied().max().unwrap_or(0);
    result.machine_utilization = machine_busy
        .iter()
        .map(|&busy| utilization_percent(busy, result.makespan))
        .collect();

    let scheduled = result.job_sequence.len();
    result.average_flow_time = if scheduled == 0 {
        0.0
    } else {
        result.total_flow_time as f64 / scheduled as f64
    };

    result
}

/// Sequences `jobs` with `rule` and simulates the resulting order.
///
/// When the rule is only provably optimal for a different machine count,
/// the result carries a [`NotOptimal`](crate::models::AdvisoryKind::NotOptimal)
/// advisory; the schedule itself is still valid.
pub fn schedule_with_rule(
    rule: &dyn SequencingRule,
    jobs: &[Job],
    machine_count: usize,
) -> ScheduleResult {
    let sequence = rule.sequence(jobs, machine_count);
    let mut result = simulate(jobs, &sequence, machine_count);

    if let Some(optimal_for) = rule.optimal_machine_count() {
        if optimal_for != machine_count {
            warn!(
                rule = rule.name(),
                optimal_for, machine_count, "rule is not makespan-optimal for this machine count"
            );
            result.add_advisory(Advisory::not_optimal(rule.name(), optimal_for, machine_count));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::AdvisoryKind;

    fn job(id: JobId, times: &[Time]) -> Job {
        Job::new(id).with_processing_times(times.to_vec())
    }

    fn three_by_three() -> Vec<Job> {
        vec![job(1, &[2, 3, 1]), job(2, &[4, 1, 2]), job(3, &[1, 2, 3])]
    }

    #[test]
    fn test_simulate_hand_computed() {
        let result = simulate(&three_by_three(), &[1, 2, 3], 3);

        // J1: M1 0-2, M2 2-5, M3 5-6
        // J2: M1 2-6, M2 6-7, M3 7-9
        // J3: M1 6-7, M2 7-9, M3 9-12
        assert_eq!(result.makespan, 12);
        assert_eq!(result.task_count(), 9);
        assert_eq!(result.job_completion_time(1), Some(6));
        assert_eq!(result.job_completion_time(2), Some(9));
        assert_eq!(result.job_completion_time(3), Some(12));

        let j2 = result.tasks_for_job(2);
        assert_eq!((j2[1].start_time, j2[1].end_time), (6, 7));

        assert_eq!(result.total_flow_time, 27);
        assert!((result.average_flow_time - 9.0).abs() < 1e-10);
        // Waiting: 0 + (9-7) + (12-6)
        assert_eq!(result.total_waiting_time, 8);

        assert!((result.machine_utilization[0] - 7.0 / 12.0 * 100.0).abs() < 1e-10);
        assert!((result.machine_utilization[1] - 50.0).abs() < 1e-10);
        assert!((result.machine_utilization[2] - 50.0).abs() < 1e-10);
        assert_eq!(result.job_sequence, vec![1, 2, 3]);
        assert!(result.is_clean());
    }

    #[test]
    fn test_single_job_single_machine() {
        let result = simulate(&[job(1, &[7])], &[1], 1);
        assert_eq!(result.makespan, 7);
        assert_eq!(result.total_waiting_time, 0);
        assert!((result.machine_utilization[0] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_sequence_order_matters() {
        let jobs = three_by_three();
        let a = simulate(&jobs, &[1, 2, 3], 3);
        let b = simulate(&jobs, &[3, 1, 2], 3);
        assert_ne!(a.makespan, b.makespan);
    }

    #[test]
    fn test_idempotent() {
        let jobs = three_by_three();
        assert_eq!(simulate(&jobs, &[2, 3, 1], 3), simulate(&jobs, &[2, 3, 1], 3));
    }

    #[test]
    fn test_unknown_job_skipped_and_reported() {
        let result = simulate(&three_by_three(), &[1, 99, 2], 3);
        assert_eq!(result.job_sequence, vec![1, 2]);
        assert_eq!(result.task_count(), 6);
        assert!(result.has_advisory(&AdvisoryKind::UnknownJob(99)));
        assert!(result.tasks_for_job(99).is_empty());
    }

    #[test]
    fn test_missing_times_read_zero() {
        let result = simulate(&[job(1, &[3])], &[1], 2);
        let tasks = result.tasks_for_job(1);
        assert_eq!(tasks[1].processing_time, 0);
        assert_eq!(tasks[1].start_time, 3);
        assert_eq!(result.makespan, 3);
        assert!((result.machine_utilization[1] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_makespan_utilization() {
        let result = simulate(&[job(1, &[0, 0])], &[1], 2);
        assert_eq!(result.makespan, 0);
        assert!(result.machine_utilization.iter().all(|&u| u == 0.0));
    }

    #[test]
    fn test_empty_input() {
        let result = simulate(&[], &[], 3);
        assert_eq!(result.task_count(), 0);
        assert_eq!(result.makespan, 0);
        assert!((result.average_flow_time - 0.0).abs() < 1e-10);
        assert_eq!(result.machine_utilization, vec![0.0; 3]);
    }

    #[test]
    fn test_zero_machines() {
        let result = simulate(&three_by_three(), &[1, 2, 3], 0);
        assert_eq!(result.task_count(), 0);
        assert!(result.machine_utilization.is_empty());
    }

    #[test]
    fn test_schedule_with_rule_johnson_two_machines_is_clean() {
        let jobs = vec![job(1, &[3, 5]), job(2, &[6, 2]), job(3, &[1, 4])];
        let result = schedule_with_rule(&rules::Johnson, &jobs, 2);
        assert_eq!(result.job_sequence, vec![3, 1, 2]);
        assert_eq!(result.makespan, 12);
        assert!(result.is_clean());
    }

    #[test]
    fn test_schedule_with_rule_johnson_three_machines_advises() {
        let result = schedule_with_rule(&rules::Johnson, &three_by_three(), 3);
        assert_eq!(result.task_count(), 9);
        assert!(result.has_advisory(&AdvisoryKind::NotOptimal {
            rule: "JOHNSON".into(),
            machine_count: 3,
        }));
    }
}
