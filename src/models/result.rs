//! Schedule result model.
//!
//! A result holds per-job waiting and turnaround times for one policy run,
//! their averages, and the execution timeline that produced them.
//!
//! # Invariant
//! `turnaround_times[i] == waiting_times[i] + burst_times[i]` for every job.

use serde::{Deserialize, Serialize};

use super::JobSet;
use crate::error::{Result, SchedulerError};
use crate::policy::PolicyName;

/// A contiguous interval during which one job occupied the processor.
///
/// Covers `[start, end)`. Zero-burst jobs produce a slice with `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Index of the job in the input job set.
    pub job_index: usize,
    /// Start time.
    pub start: u64,
    /// End time.
    pub end: u64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(job_index: usize, start: u64, end: u64) -> Self {
        Self {
            job_index,
            start,
            end,
        }
    }

    /// Length of the slice.
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Outcome of running one scheduling policy over a job set.
///
/// Vectors are index-aligned with the input job set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Policy that produced this result.
    pub policy: PolicyName,
    /// Waiting time per job.
    pub waiting_times: Vec<u64>,
    /// Turnaround time per job (waiting + burst).
    pub turnaround_times: Vec<u64>,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Execution timeline in chronological order.
    pub timeline: Vec<Slice>,
}

impl ScheduleResult {
    /// Assembles a result from per-job waiting times.
    ///
    /// Turnaround times and both averages are derived here so every policy
    /// shares the same arithmetic.
    pub(crate) fn from_waiting_times(
        policy: PolicyName,
        jobs: &JobSet,
        waiting_times: Vec<u64>,
        timeline: Vec<Slice>,
    ) -> Result<Self> {
        debug_assert_eq!(waiting_times.len(), jobs.len());

        let turnaround_times = waiting_times
            .iter()
            .zip(jobs.iter())
            .map(|(&w, job)| {
                w.checked_add(job.burst_time)
                    .ok_or_else(SchedulerError::burst_overflow)
            })
            .collect::<Result<Vec<u64>>>()?;

        let avg_waiting_time = average(&waiting_times)?;
        let avg_turnaround_time = average(&turnaround_times)?;

        Ok(Self {
            policy,
            waiting_times,
            turnaround_times,
            avg_waiting_time,
            avg_turnaround_time,
            timeline,
        })
    }

    /// Number of jobs covered.
    pub fn job_count(&self) -> usize {
        self.waiting_times.len()
    }

    /// Completion time of a job. Equal to its turnaround, since all jobs arrive at t=0.
    pub fn completion_time(&self, job_index: usize) -> Option<u64> {
        self.turnaround_times.get(job_index).copied()
    }

    /// Completion time of the last job (0 if no jobs).
    pub fn makespan(&self) -> u64 {
        self.turnaround_times.iter().copied().max().unwrap_or(0)
    }

    /// Job indices in the order they finished.
    ///
    /// Ties on completion time keep input order.
    pub fn completion_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.job_count()).collect();
        order.sort_by_key(|&i| self.turnaround_times[i]);
        order
    }

    /// Timeline slices belonging to one job.
    pub fn slices_for(&self, job_index: usize) -> impl Iterator<Item = &Slice> {
        self.timeline
            .iter()
            .filter(move |s| s.job_index == job_index)
    }
}

/// Mean of the values as `f64`.
///
/// Fails with [`SchedulerError::EmptyJobSet`] instead of dividing by zero.
pub(crate) fn average(values: &[u64]) -> Result<f64> {
    if values.is_empty() {
        return Err(SchedulerError::EmptyJobSet);
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    Ok(sum / values.len() as f64)
}
