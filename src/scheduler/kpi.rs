//! Schedule quality metrics (KPIs) and policy comparison.
//!
//! Computes summary indicators from a completed [`ScheduleResult`] so the
//! presentation layer can put several policies side by side.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Waiting | Mean time spent ready but not running |
//! | Avg Turnaround | Mean time from t=0 to completion |
//! | Max Waiting | Largest single waiting time |
//! | Throughput | Jobs completed per time unit |
//! | Context Switches | Adjacent non-empty slices of different jobs |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use log::debug;

use crate::error::Result;
use crate::models::{JobSet, ScheduleResult};
use crate::policy::{PolicyName, SchedulingPolicy};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Policy the metrics describe.
    pub policy: PolicyName,
    /// Latest completion time.
    pub makespan: u64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Largest waiting time of any single job.
    pub max_waiting_time: u64,
    /// Jobs completed per time unit (0.0 when makespan is 0).
    pub throughput: f64,
    /// Number of times the processor switched from one job to another.
    /// Jobs that finish without running (zero burst) do not count.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let max_waiting_time = result.waiting_times.iter().copied().max().unwrap_or(0);

        let throughput = if makespan == 0 {
            0.0
        } else {
            result.job_count() as f64 / makespan as f64
        };

        // Zero-length slices (zero-burst jobs) never hold the processor.
        let busy: Vec<usize> = result
            .timeline
            .iter()
            .filter(|s| s.duration() > 0)
            .map(|s| s.job_index)
            .collect();
        let context_switches = busy.windows(2).filter(|w| w[0] != w[1]).count();

        Self {
            policy: result.policy,
            makespan,
            avg_waiting_time: result.avg_waiting_time,
            avg_turnaround_time: result.avg_turnaround_time,
            max_waiting_time,
            throughput,
            context_switches,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, max_waiting: u64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.max_waiting_time <= max_waiting
    }
}

/// Runs several policies over the same jobs.
///
/// Results come back in the order the policies were given. The first
/// failure aborts the comparison.
pub fn compare_policies(
    jobs: &JobSet,
    policies: &[&dyn SchedulingPolicy],
) -> Result<Vec<ScheduleResult>> {
    let results = policies
        .iter()
        .map(|p| p.schedule(jobs))
        .collect::<Result<Vec<_>>>()?;
    debug!("compared {} policies over {} jobs", results.len(), jobs.len());
    Ok(results)
}

/// The result with the lowest average waiting time. Earlier results win ties.
pub fn best_by_avg_waiting(results: &[ScheduleResult]) -> Option<&ScheduleResult> {
    results.iter().reduce(|best, r| {
        if r.avg_waiting_time < best.avg_waiting_time {
            r
        } else {
            best
        }
    })
}
