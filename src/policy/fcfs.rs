//! First-Come-First-Served.

use super::{log_run, run_to_completion, PolicyName, SchedulingPolicy};
use crate::error::Result;
use crate::models::{JobSet, ScheduleResult};
use crate::validation::ensure_schedulable;

/// First-Come-First-Served.
///
/// Runs jobs strictly in input order. Each job waits for the cumulative
/// burst of every job ahead of it:
/// `waiting[0] = 0`, `waiting[i] = waiting[i-1] + burst[i-1]`.
///
/// # Complexity
/// O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> PolicyName {
        PolicyName::Fcfs
    }

    fn schedule(&self, jobs: &JobSet) -> Result<ScheduleResult> {
        ensure_schedulable(jobs)?;

        let order: Vec<usize> = (0..jobs.len()).collect();
        let (waiting, timeline) = run_to_completion(jobs, &order)?;
        let result = ScheduleResult::from_waiting_times(PolicyName::Fcfs, jobs, waiting, timeline)?;

        log_run(&result);
        Ok(result)
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
