//! Scheduling domain models.
//!
//! Provides the data types exchanged with the presentation layer: the jobs
//! it supplies and the results it displays.
//!
//! # Domain Mappings
//!
//! | burst-sched | File compression | CPU scheduling |
//! |-------------|------------------|----------------|
//! | Job | File to compress | Process |
//! | Burst time | Compression cost | CPU burst |
//! | JobSet | Selected files | Ready queue at t=0 |
//! | ScheduleResult | Result chart data | Gantt chart + metrics |

mod job;
mod result;

pub use job::{Job, JobSet};
pub use result::{ScheduleResult, Slice};
