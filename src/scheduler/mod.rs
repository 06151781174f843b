//! Batch scheduler and KPI evaluation.
//!
//! Provides the job-accumulating [`Scheduler`] the presentation layer
//! drives, and schedule quality metrics for comparing policies.
//!
//! # KPI
//!
//! `ScheduleKpi` derives makespan, waiting-time extremes, throughput and
//! context switches from a `ScheduleResult`.

mod batch;
mod kpi;

pub use batch::Scheduler;
pub use kpi::{best_by_avg_waiting, compare_policies, ScheduleKpi};
