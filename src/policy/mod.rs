//! Scheduling policies.
//!
//! Each policy turns a [`JobSet`] into a [`ScheduleResult`]. Policies are
//! pure: they read the job set, hold no mutable state, and return the same
//! result for the same input.
//!
//! # Usage
//!
//! ```
//! use burst_sched::models::JobSet;
//! use burst_sched::policy::{Fcfs, RoundRobin, SchedulingPolicy, Sjf};
//!
//! let jobs = JobSet::from_bursts(&[5, 3, 8]);
//! let policies: Vec<Box<dyn SchedulingPolicy>> = vec![
//!     Box::new(Fcfs),
//!     Box::new(Sjf),
//!     Box::new(RoundRobin::new(2).unwrap()),
//! ];
//! for policy in &policies {
//!     let result = policy.schedule(&jobs).unwrap();
//!     assert_eq!(result.job_count(), 3);
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::{self, Debug};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::{JobSet, ScheduleResult, Slice};

/// Names of the supported policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyName {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
}

impl PolicyName {
    /// Short display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyName::Fcfs => "FCFS",
            PolicyName::Sjf => "SJF",
            PolicyName::RoundRobin => "Round Robin",
        }
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduling discipline over a batch of jobs that all arrive at t=0.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name.
    fn name(&self) -> PolicyName;

    /// Computes waiting and turnaround times for every job.
    ///
    /// Fails with [`EmptyJobSet`](crate::error::SchedulerError::EmptyJobSet)
    /// when `jobs` is empty.
    fn schedule(&self, jobs: &JobSet) -> Result<ScheduleResult>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name().as_str()
    }
}

/// Runs jobs back to back in the given order, each to completion.
///
/// Returns waiting times indexed by original job position, plus the timeline.
/// Fails with `InvalidInput` if the clock would overflow.
fn run_to_completion(jobs: &JobSet, order: &[usize]) -> Result<(Vec<u64>, Vec<Slice>)> {
    let all = jobs.jobs();
    let mut waiting = vec![0; all.len()];
    let mut timeline = Vec::with_capacity(order.len());
    let mut clock: u64 = 0;

    for &idx in order {
        waiting[idx] = clock;
        let end = clock
            .checked_add(all[idx].burst_time)
            .ok_or_else(SchedulerError::burst_overflow)?;
        timeline.push(Slice::new(idx, clock, end));
        clock = end;
    }

    Ok((waiting, timeline))
}

fn log_run(result: &ScheduleResult) {
    debug!(
        "{} scheduled {} jobs: avg waiting {:.2}, avg turnaround {:.2}, makespan {}",
        result.policy,
        result.job_count(),
        result.avg_waiting_time,
        result.avg_turnaround_time,
        result.makespan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(Fcfs.name(), PolicyName::Fcfs);
        assert_eq!(Sjf.name(), PolicyName::Sjf);
        assert_eq!(RoundRobin::new(3).unwrap().name(), PolicyName::RoundRobin);
        assert_eq!(PolicyName::RoundRobin.to_string(), "Round Robin");
    }

    #[test]
    fn test_run_to_completion_custom_order() {
        let jobs = JobSet::from_bursts(&[2, 4, 1]);
        let (waiting, timeline) = run_to_completion(&jobs, &[2, 0, 1]).unwrap();
        assert_eq!(waiting, vec![1, 3, 0]);
        assert_eq!(
            timeline,
            vec![Slice::new(2, 0, 1), Slice::new(0, 1, 3), Slice::new(1, 3, 7)]
        );
    }

    #[test]
    fn test_run_to_completion_overflow() {
        let jobs = JobSet::from_bursts(&[u64::MAX, 1]);
        assert_eq!(
            run_to_completion(&jobs, &[0, 1]).unwrap_err(),
            SchedulerError::burst_overflow()
        );
    }

    #[test]
    fn test_overflowing_bursts_rejected_by_all_policies() {
        let max = i64::MAX as u64;
        let jobs = JobSet::from_bursts(&[max, max, max]);
        let policies: Vec<Box<dyn SchedulingPolicy>> = vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(RoundRobin::new(1).unwrap()),
            Box::new(RoundRobin::new(i64::MAX).unwrap()),
        ];
        for policy in &policies {
            assert!(
                matches!(
                    policy.schedule(&jobs),
                    Err(SchedulerError::InvalidInput(ref m)) if m.contains("overflows")
                ),
                "{}",
                policy.name()
            );
        }
    }

    #[test]
    fn test_turnaround_invariant_all_policies() {
        let sets = [
            vec![5, 3, 8],
            vec![6, 8, 7, 3],
            vec![10, 4, 6],
            vec![0, 0, 0],
            vec![1],
            vec![9, 0, 4, 4, 12, 1, 7],
        ];
        let policies: Vec<Box<dyn SchedulingPolicy>> = vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(RoundRobin::new(1).unwrap()),
            Box::new(RoundRobin::new(4).unwrap()),
            Box::new(RoundRobin::new(100).unwrap()),
        ];

        for bursts in &sets {
            let jobs = JobSet::from_bursts(bursts);
            for policy in &policies {
                let result = policy.schedule(&jobs).unwrap();
                for (i, &burst) in bursts.iter().enumerate() {
                    assert_eq!(
                        result.turnaround_times[i],
                        result.waiting_times[i] + burst,
                        "{} on {:?}, job {}",
                        policy.name(),
                        bursts,
                        i
                    );
                }
                // Every unit of work appears exactly once in the timeline.
                let busy: u64 = result.timeline.iter().map(Slice::duration).sum();
                assert_eq!(Some(busy), jobs.total_burst());
                assert_eq!(Some(result.makespan()), jobs.total_burst());
            }
        }
    }
}
