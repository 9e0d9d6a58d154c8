//! Random job generation.
//!
//! Generic over [`rand::Rng`] so callers can pass a seeded generator for
//! reproducible instances.

use rand::Rng;

use crate::models::{Job, JobId, Time};

/// Range of processing times for freshly generated jobs.
pub const SAMPLE_TIME_RANGE: std::ops::RangeInclusive<Time> = 1..=10;

/// Range of processing times when re-filling an existing job set.
pub const RANDOMIZE_TIME_RANGE: std::ops::RangeInclusive<Time> = 1..=15;

/// Generates `num_jobs` jobs with ids `1..=num_jobs`, names `J{id}`, and
/// `num_machines` processing times each, uniform in [`SAMPLE_TIME_RANGE`].
pub fn generate_sample_jobs<R: Rng>(num_jobs: usize, num_machines: usize, rng: &mut R) -> Vec<Job> {
    (1..=num_jobs)
        .map(|i| {
            let times = (0..num_machines)
                .map(|_| rng.random_range(SAMPLE_TIME_RANGE))
                .collect();
            Job::new(i as JobId).with_processing_times(times)
        })
        .collect()
}

/// Returns a copy of `jobs` with every processing time redrawn uniformly
/// from [`RANDOMIZE_TIME_RANGE`]. Ids, names, and vector lengths are kept.
pub fn randomize_processing_times<R: Rng>(jobs: &[Job], rng: &mut R) -> Vec<Job> {
    jobs.iter()
        .map(|job| Job {
            processing_times: job
                .processing_times
                .iter()
                .map(|_| rng.random_range(RANDOMIZE_TIME_RANGE))
                .collect(),
            ..job.clone()
        })
        .collect()
}

/// Returns a copy of `jobs` with every processing time set to 1 on
/// `machine_count` machines.
pub fn reset_processing_times(jobs: &[Job], machine_count: usize) -> Vec<Job> {
    jobs.iter()
        .map(|job| Job {
            processing_times: vec![1; machine_count],
            ..job.clone()
        })
        .collect()
}
