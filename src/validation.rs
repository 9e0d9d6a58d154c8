//! Input validation for scheduling runs.
//!
//! Checks a job set against the configured machine count before
//! scheduling. Detects:
//! - Empty job sets and out-of-bounds counts
//! - Duplicate job IDs
//! - Processing-time vectors of the wrong length
//! - Negative processing times
//!
//! The schedulers tolerate all of these; validation is for callers that
//! want to reject or correct input first. [`sanitize_jobs`] performs the
//! boundary correction (clamp and resize) instead of rejecting.

use std::collections::HashSet;

use crate::config::{MAX_JOBS, MAX_MACHINES, MIN_MACHINES};
use crate::models::{Job, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No jobs to schedule.
    NoJobs,
    /// More jobs than the supported maximum.
    TooManyJobs,
    /// Machine count outside the supported range.
    MachineCountOutOfRange,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job's processing-time vector length differs from the machine count.
    LengthMismatch,
    /// A processing time is negative.
    NegativeProcessingTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job set for a flow-shop run on `machine_count` machines.
///
/// Checks:
/// 1. At least one job, at most `MAX_JOBS`
/// 2. Machine count within `[MIN_MACHINES, MAX_MACHINES]`
/// 3. No duplicate job IDs
/// 4. Every processing-time vector has `machine_count` entries
/// 5. No negative processing times
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job], machine_count: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoJobs,
            "At least one job must be defined",
        ));
    }
    if jobs.len() > MAX_JOBS {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyJobs,
            format!("{} jobs exceeds the maximum of {MAX_JOBS}", jobs.len()),
        ));
    }
    if !(MIN_MACHINES..=MAX_MACHINES).contains(&machine_count) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MachineCountOutOfRange,
            format!("Machine count {machine_count} outside {MIN_MACHINES}..={MAX_MACHINES}"),
        ));
    }

    let mut seen = HashSet::new();
    for job in jobs {
        if !seen.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.machine_count() != machine_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!(
                    "Job {} has {} processing times for {machine_count} machines",
                    job.id,
                    job.machine_count()
                ),
            ));
        }

        if let Some((m, &t)) = job
            .processing_times
            .iter()
            .enumerate()
            .find(|(_, t)| **t < 0)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeProcessingTime,
                format!("Job {} has negative time {t} on machine {}", job.id, m + 1),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Clamps a processing time to be non-negative.
#[inline]
pub fn clamp_processing_time(time: Time) -> Time {
    time.max(0)
}

/// Returns a corrected copy of `jobs` for `machine_count` machines.
///
/// Negative times become 0; short vectors are padded with 1 (the default
/// time for a new entry), long vectors are truncated.
pub fn sanitize_jobs(jobs: &[Job], machine_count: usize) -> Vec<Job> {
    jobs.iter()
        .map(|job| {
            let mut times: Vec<Time> = job
                .processing_times
                .iter()
                .take(machine_count)
                .map(|&t| clamp_processing_time(t))
                .collect();
            times.resize(machine_count, 1);
            Job {
                processing_times: times,
                ..job.clone()
            }
        })
        .collect()
}
