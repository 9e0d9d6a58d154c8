//! Sequencing rules for flow-shop scheduling.
//!
//! A sequencing rule turns a job set into a job visiting order. The
//! flow-shop simulator then turns that order into a schedule.
//!
//! # Usage
//!
//! ```
//! use u_flowshop::config::Algorithm;
//! use u_flowshop::dispatching::{rule_for, SequencingRule};
//! use u_flowshop::models::Job;
//!
//! let jobs = vec![
//!     Job::new(1).with_processing_times(vec![5, 5]),
//!     Job::new(2).with_processing_times(vec![1, 2]),
//! ];
//! let order = rule_for(Algorithm::Spt).sequence(&jobs, 2);
//! assert_eq!(order, vec![2, 1]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4-6
//! - Johnson (1954), two-machine flow shop
//! - Nawaz, Enscore & Ham (1983), m-machine flow shop insertion heuristic

mod neh;
pub mod rules;

pub use neh::Neh;

use crate::config::Algorithm;
use crate::models::{Job, JobId};
use std::fmt::Debug;

/// A rule that orders jobs for a permutation flow shop.
///
/// Implementations never mutate `jobs`; any sorting happens on a copy.
pub trait SequencingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "NEH").
    fn name(&self) -> &'static str;

    /// Returns the job visiting order.
    fn sequence(&self, jobs: &[Job], machine_count: usize) -> Vec<JobId>;

    /// Machine count for which the rule is provably makespan-optimal, if any.
    fn optimal_machine_count(&self) -> Option<usize> {
        None
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns the sequencing rule implementing `algorithm`.
pub fn rule_for(algorithm: Algorithm) -> &'static dyn SequencingRule {
    match algorithm {
        Algorithm::Fifo => &rules::Fifo,
        Algorithm::Spt => &rules::Spt,
        Algorithm::Lpt => &rules::Lpt,
        Algorithm::Johnson => &rules::Johnson,
        Algorithm::Neh => &Neh,
    }
}
