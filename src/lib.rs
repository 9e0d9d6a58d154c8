//! Production scheduling engine for flow shops and parallel machines.
//!
//! Computes schedules for a set of jobs under classical sequencing rules and
//! derives performance metrics from the result. Every scheduling function is
//! pure: inputs are borrowed, never mutated, and each call owns its state.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `ScheduleTask`, `ScheduleResult`, `Advisory`
//! - **`config`**: Shop topology, algorithm selection, boundary clamping
//! - **`dispatching`**: Sequencing rules: FIFO, SPT, LPT, Johnson, NEH
//! - **`scheduler`**: Flow-shop simulator, parallel list scheduler, dispatcher, metrics
//! - **`compare`**: Runs every applicable algorithm and ranks by makespan
//! - **`sample`**: Random job generation
//! - **`validation`**: Input integrity checks
//! - **`export`**: JSON export record
//!
//! # Example
//!
//! ```
//! use u_flowshop::config::{Algorithm, SystemType};
//! use u_flowshop::models::Job;
//! use u_flowshop::scheduler::{schedule, ScheduleMetrics};
//!
//! let jobs = vec![
//!     Job::new(1).with_processing_times(vec![3, 5]),
//!     Job::new(2).with_processing_times(vec![6, 2]),
//!     Job::new(3).with_processing_times(vec![1, 4]),
//! ];
//! let result = schedule(&jobs, 2, &SystemType::FlowShop, Algorithm::Johnson);
//! assert_eq!(result.job_sequence, vec![3, 1, 2]);
//! assert_eq!(result.makespan, 12);
//!
//! let metrics = ScheduleMetrics::calculate(&result);
//! assert_eq!(metrics.makespan, 12);
//! ```
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules
//!   with setup times included"
//! - Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//!   n-job flow-shop sequencing problem"
//! - Graham (1969), "Bounds on multiprocessing timing anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod compare;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod export;
pub mod models;
pub mod sample;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
