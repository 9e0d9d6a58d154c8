//! Parallel-machine list scheduler.
//!
//! # Algorithm
//!
//! 1. Order jobs by the priority rule (SPT/LPT on the single processing
//!    time, stable; anything else keeps input order).
//! 2. Assign each job, in order, to the machine with the least accumulated
//!    finish time (lowest index wins ties). The job starts at that machine's
//!    finish time.
//!
//! Jobs are single-operation: only `processing_times[0]` is read.
//!
//! # Complexity
//! O(n log n + n * m) where n=jobs, m=machines.
//!
//! # Reference
//! Graham (1969), "Bounds on multiprocessing timing anomalies":
//! LPT list scheduling is within 4/3 - 1/(3m) of the optimal makespan.

use std::cmp::Reverse;

use crate::config::Algorithm;
use crate::models::{utilization_percent, Job, ScheduleResult, ScheduleTask, Time};

/// Schedules single-operation jobs on identical parallel machines.
///
/// # Metrics
/// Machines run independently, so flow figures are load-based:
/// - total flow time = total processing time
/// - total waiting time = idle capacity, `makespan × machine_count - total processing time`
pub fn schedule_parallel(jobs: &[Job], machine_count: usize, algorithm: Algorithm) -> ScheduleResult {
    let mut result = ScheduleResult::empty(machine_count);
    if machine_count == 0 {
        return result;
    }

    let order = list_order(jobs, algorithm);
    let mut machine_end: Vec<Time> = vec![0; machine_count];
    let mut machine_busy: Vec<Time> = vec![0; machine_count];

    for job in &order {
        let (machine, &start) = machine_end
            .iter()
            .enumerate()
            .min_by_key(|&(_, &end)| end)
            .unwrap_or((0, &0));
        let processing = job.processing_time(0);
        let task = ScheduleTask::new(job.id, machine + 1, start, processing);

        machine_end[machine] = task.end_time;
        machine_busy[machine] += processing;
        result.tasks.push(task);
        result.job_sequence.push(job.id);
    }

    let total_processing: Time = machine_busy.iter().sum();
    result.makespan = machine_end.iter().copied().max().unwrap_or(0);
    result.total_flow_time = total_processing;
    result.average_flow_time = if jobs.is_empty() {
        0.0
    } else {
        total_processing as f64 / jobs.len() as f64
    };
    result.total_waiting_time = result.makespan * machine_count as Time - total_processing;
    result.machine_utilization = machine_busy
        .iter()
        .map(|&busy| utilization_percent(busy, result.makespan))
        .collect();

    result
}

/// List order for the priority rule, on a copy of the job references.
fn list_order(jobs: &[Job], algorithm: Algorithm) -> Vec<&Job> {
    let mut order: Vec<&Job> = jobs.iter().collect();
    match algorithm {
        Algorithm::Spt => order.sort_by_key(|j| j.processing_time(0)),
        Algorithm::Lpt => order.sort_by_key(|j| Reverse(j.processing_time(0))),
        Algorithm::Fifo | Algorithm::Johnson | Algorithm::Neh => {}
    }
    order
}
