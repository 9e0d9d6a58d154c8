//! Schedulers, dispatcher, and metrics.
//!
//! # Control Flow
//!
//! ```text
//! schedule(topology, algorithm)
//!   ├─ flow-shop  → SequencingRule → simulate → ScheduleResult
//!   ├─ parallel   → schedule_parallel         → ScheduleResult
//!   └─ otherwise  → FIFO flow-shop (fallback) → ScheduleResult
//!
//! ScheduleResult → ScheduleMetrics::calculate → ScheduleMetrics
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5-6
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod dispatcher;
mod flow_shop;
mod metrics;
mod parallel;

pub use dispatcher::{schedule, schedule_config};
pub use flow_shop::{schedule_with_rule, simulate};
pub use metrics::ScheduleMetrics;
pub use parallel::schedule_parallel;
