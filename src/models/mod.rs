//! Scheduling domain models.
//!
//! Provides the data types shared by every scheduler in the crate: the
//! input jobs and the schedule produced for them.
//!
//! # Domain Mappings
//!
//! | u-flowshop | Manufacturing | Logistics |
//! |------------|---------------|-----------|
//! | Job | Order/Lot | Shipment |
//! | Machine | Workstation | Dock/Truck |
//! | ScheduleTask | Operation slot | Loading slot |
//! | ScheduleResult | Production Plan | Route Plan |

mod job;
mod schedule;

pub use job::{Job, JobId, Time};
pub use schedule::{Advisory, AdvisoryKind, ScheduleResult, ScheduleTask};
pub(crate) use schedule::utilization_percent;
