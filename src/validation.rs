//! Input validation at the scheduler boundary.
//!
//! Callers hand over signed integers (the presentation layer reads them
//! from dialogs or generators). These checks convert them into the
//! unsigned domain types or reject them:
//! - Negative burst times
//! - Non-positive round-robin quanta
//! - Empty job sets (checked before any average is computed)
//! - Job sets whose total burst overflows the clock
//!
//! Nothing is clamped. A rejected value leaves all state untouched.

use std::num::NonZeroU64;

use log::debug;

use crate::error::{Result, SchedulerError};
use crate::models::JobSet;

/// Converts a caller-supplied burst time into a non-negative duration.
pub fn validate_burst(burst_time: i64) -> Result<u64> {
    u64::try_from(burst_time).map_err(|_| {
        debug!("rejected burst time {burst_time}");
        SchedulerError::InvalidInput(format!(
            "burst time must be non-negative, got {burst_time}"
        ))
    })
}

/// Converts a caller-supplied quantum into a positive slice length.
pub fn validate_quantum(quantum: i64) -> Result<NonZeroU64> {
    u64::try_from(quantum)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| {
            debug!("rejected quantum {quantum}");
            SchedulerError::InvalidInput(format!("quantum must be positive, got {quantum}"))
        })
}

/// Fails with [`SchedulerError::EmptyJobSet`] when there is nothing to schedule.
pub fn ensure_non_empty(jobs: &JobSet) -> Result<()> {
    if jobs.is_empty() {
        Err(SchedulerError::EmptyJobSet)
    } else {
        Ok(())
    }
}

/// Fails unless the job set is non-empty and its total burst fits in `u64`.
///
/// Every clock value a policy produces is bounded by the total burst, so
/// passing this check means no run can overflow.
pub fn ensure_schedulable(jobs: &JobSet) -> Result<u64> {
    ensure_non_empty(jobs)?;
    jobs.total_burst().ok_or_else(|| {
        debug!("rejected job set of {} jobs: total burst overflows", jobs.len());
        SchedulerError::burst_overflow()
    })
}
