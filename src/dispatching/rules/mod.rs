//! Built-in static sequencing rules.
//!
//! # Categories
//!
//! - **Arrival**: FIFO
//! - **Time-based**: SPT, LPT (by total processing time across machines)
//! - **Two-machine optimal**: Johnson
//!
//! All sorts are stable: ties keep input order.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Johnson (1954), "Optimal two- and three-stage production schedules"

use super::SequencingRule;
use crate::models::{Job, JobId};

/// Stable ascending order of jobs by `key`.
fn ordered_by<K: Ord>(jobs: &[Job], key: impl Fn(&Job) -> K) -> Vec<&Job> {
    let mut sorted: Vec<&Job> = jobs.iter().collect();
    sorted.sort_by_key(|j| key(*j));
    sorted
}

fn ids<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Vec<JobId> {
    jobs.into_iter().map(|j| j.id).collect()
}

// ======================== Arrival ========================

/// First In First Out.
///
/// Keeps the input order.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl SequencingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn sequence(&self, jobs: &[Job], _machine_count: usize) -> Vec<JobId> {
        ids(jobs)
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

// ======================== Time-based ========================

/// Shortest Processing Time.
///
/// Orders jobs by ascending total processing time.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl SequencingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn sequence(&self, jobs: &[Job], _machine_count: usize) -> Vec<JobId> {
        ids(ordered_by(jobs, Job::total_processing_time))
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Longest Processing Time.
///
/// Orders jobs by descending total processing time.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl SequencingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn sequence(&self, jobs: &[Job], _machine_count: usize) -> Vec<JobId> {
        ids(ordered_by(jobs, |j| std::cmp::Reverse(j.total_processing_time())))
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

// ======================== Two-machine optimal ========================

/// Johnson's rule.
///
/// Jobs with `p1 <= p2` go first, ascending by `p1`; the rest follow,
/// descending by `p2`. Makespan-optimal for exactly two machines. On other
/// machine counts only the first two times are considered.
///
/// # Reference
/// Johnson (1954), "Optimal two- and three-stage production schedules
/// with setup times included"
#[derive(Debug, Clone, Copy)]
pub struct Johnson;

impl SequencingRule for Johnson {
    fn name(&self) -> &'static str {
        "JOHNSON"
    }

    fn sequence(&self, jobs: &[Job], _machine_count: usize) -> Vec<JobId> {
        let (mut head, mut tail): (Vec<&Job>, Vec<&Job>) = jobs
            .iter()
            .partition(|j| j.processing_time(0) <= j.processing_time(1));

        head.sort_by_key(|j| j.processing_time(0));
        tail.sort_by_key(|j| std::cmp::Reverse(j.processing_time(1)));

        ids(head.into_iter().chain(tail))
    }

    fn optimal_machine_count(&self) -> Option<usize> {
        Some(2)
    }

    fn description(&self) -> &'static str {
        "Johnson's Two-Machine Rule"
    }
}
