//! Error types for scheduling runs.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors reported by the scheduler.
///
/// Errors are never recovered internally: a call either returns a complete
/// [`ScheduleResult`](crate::models::ScheduleResult) or one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// A burst time was negative or a quantum was not positive.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A scheduling run was requested on a job set with no jobs.
    #[error("job set is empty, nothing to schedule")]
    EmptyJobSet,
}

impl SchedulerError {
    /// Burst times whose sum does not fit the clock.
    pub(crate) fn burst_overflow() -> Self {
        SchedulerError::InvalidInput("total burst overflows".into())
    }
}
