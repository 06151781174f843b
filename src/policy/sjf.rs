//! Shortest-Job-First (non-preemptive).

use super::{log_run, run_to_completion, PolicyName, SchedulingPolicy};
use crate::error::Result;
use crate::models::{JobSet, ScheduleResult};
use crate::validation::ensure_schedulable;

/// Shortest-Job-First, non-preemptive.
///
/// All jobs are available at t=0, so the schedule is a single sort: jobs
/// run in ascending burst order, each to completion. Waiting times are
/// written back at each job's original index.
///
/// Ties keep input order (stable sort), so the earlier job wins.
///
/// # Complexity
/// O(n log n).
///
/// # Reference
/// Smith (1956), SPT ordering minimizes mean flow time on a single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Sjf {
    /// Job indices in the order SJF services them.
    pub fn processing_order(jobs: &JobSet) -> Vec<usize> {
        let all = jobs.jobs();
        let mut order: Vec<usize> = (0..all.len()).collect();
        order.sort_by_key(|&i| all[i].burst_time);
        order
    }
}

impl SchedulingPolicy for Sjf {
    fn name(&self) -> PolicyName {
        PolicyName::Sjf
    }

    fn schedule(&self, jobs: &JobSet) -> Result<ScheduleResult> {
        ensure_schedulable(jobs)?;

        let order = Self::processing_order(jobs);
        let (waiting, timeline) = run_to_completion(jobs, &order)?;
        let result = ScheduleResult::from_waiting_times(PolicyName::Sjf, jobs, waiting, timeline)?;

        log_run(&result);
        Ok(result)
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First (non-preemptive)"
    }
}
