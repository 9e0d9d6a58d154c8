//! NEH constructive heuristic.
//!
//! # Algorithm
//!
//! 1. Sort jobs by total processing time, descending (stable).
//! 2. Seed the working sequence with the first job.
//! 3. For each remaining job, try every insertion position in the working
//!    sequence and keep the one with the lowest simulated makespan
//!    (first position wins ties).
//!
//! # Complexity
//! O(n³ · m): n insertion rounds × n positions × O(n · m) simulation.
//! Instance sizes are bounded by [`MAX_JOBS`](crate::config::MAX_JOBS).
//!
//! # Reference
//! Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//! n-job flow-shop sequencing problem", Omega 11(1)

use std::cmp::Reverse;

use super::SequencingRule;
use crate::models::{Job, JobId, Time};
use crate::scheduler::simulate;

/// Nawaz-Enscore-Ham insertion heuristic.
///
/// Uses the flow-shop simulator as a makespan oracle. Not guaranteed
/// optimal, but the standard strong constructive heuristic for m-machine
/// permutation flow shops.
#[derive(Debug, Clone, Copy)]
pub struct Neh;

impl SequencingRule for Neh {
    fn name(&self) -> &'static str {
        "NEH"
    }

    fn sequence(&self, jobs: &[Job], machine_count: usize) -> Vec<JobId> {
        let mut reference: Vec<&Job> = jobs.iter().collect();
        reference.sort_by_key(|j| Reverse(j.total_processing_time()));

        let mut remaining = reference.into_iter();
        let Some(first) = remaining.next() else {
            return Vec::new();
        };

        let mut working = vec![first.id];
        for job in remaining {
            let position = best_insertion(jobs, &working, job.id, machine_count);
            working.insert(position, job.id);
        }

        working
    }

    fn description(&self) -> &'static str {
        "Nawaz-Enscore-Ham Insertion"
    }
}

/// Position in `working` where inserting `job_id` yields the lowest makespan.
fn best_insertion(jobs: &[Job], working: &[JobId], job_id: JobId, machine_count: usize) -> usize {
    let mut best_position = 0;
    let mut best_makespan = Time::MAX;
    let mut candidate = Vec::with_capacity(working.len() + 1);

    for position in 0..=working.len() {
        candidate.clear();
        candidate.extend_from_slice(&working[..position]);
        candidate.push(job_id);
        candidate.extend_from_slice(&working[position..]);

        let makespan = simulate(jobs, &candidate, machine_count).makespan;
        if makespan < best_makespan {
            best_makespan = makespan;
            best_position = position;
        }
    }

    best_position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::Fifo;

    fn job(id: JobId, times: &[Time]) -> Job {
        Job::new(id).with_processing_times(times.to_vec())
    }

    fn makespan(jobs: &[Job], rule: &dyn SequencingRule, machines: usize) -> Time {
        simulate(jobs, &rule.sequence(jobs, machines), machines).makespan
    }

    #[test]
    fn test_neh_three_machines() {
        let jobs = vec![job(1, &[2, 3, 1]), job(2, &[4, 1, 2]), job(3, &[1, 2, 3])];
        // Reference order J2, J1, J3; [1,2] beats [2,1] (9 vs 10);
        // J3 lands in front: [3,1,2] = 10 vs 12 and 12
        assert_eq!(Neh.sequence(&jobs, 3), vec![3, 1, 2]);
        assert_eq!(makespan(&jobs, &Neh, 3), 10);
        assert_eq!(makespan(&jobs, &Fifo, 3), 12);
    }

    #[test]
    fn test_neh_two_machines_matches_johnson_optimum() {
        let jobs = vec![job(1, &[3, 5]), job(2, &[6, 2]), job(3, &[1, 4])];
        assert_eq!(Neh.sequence(&jobs, 2), vec![3, 1, 2]);
        assert_eq!(makespan(&jobs, &Neh, 2), 12);
    }

    #[test]
    fn test_neh_ties_keep_first_position() {
        // Identical jobs: every insertion ties, so each lands at position 0
        let jobs = vec![job(1, &[2, 2]), job(2, &[2, 2]), job(3, &[2, 2])];
        assert_eq!(Neh.sequence(&jobs, 2), vec![3, 2, 1]);
    }

    #[test]
    fn test_neh_single_job() {
        assert_eq!(Neh.sequence(&[job(5, &[1, 2])], 2), vec![5]);
    }

    #[test]
    fn test_neh_empty() {
        assert!(Neh.sequence(&[], 3).is_empty());
    }

    #[test]
    fn test_neh_is_a_permutation() {
        let jobs: Vec<Job> = (1..=8)
            .map(|i| job(i, &[(i as Time * 7) % 5 + 1, (i as Time * 3) % 4 + 1, 2]))
            .collect();
        let mut order = Neh.sequence(&jobs, 3);
        order.sort_unstable();
        assert_eq!(order, (1..=8).collect::<Vec<JobId>>());
    }
}
