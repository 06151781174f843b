//! Batch scheduler: accumulates jobs, then runs policies over a snapshot.
//!
//! The presentation layer adds jobs one at a time (e.g. as files are
//! picked). Each run takes an immutable [`JobSet`] snapshot so algorithms
//! never observe a half-built batch.

use log::debug;

use crate::error::Result;
use crate::models::{Job, JobSet, ScheduleResult};
use crate::policy::{Fcfs, PolicyName, RoundRobin, SchedulingPolicy, Sjf};
use crate::suggest::{suggest_policy_with, Suggestion, SuggestionThresholds};
use crate::validation::validate_burst;

/// Job accumulator and policy runner.
///
/// # Example
///
/// ```
/// use burst_sched::scheduler::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.add_job("a.txt", 5).unwrap();
/// scheduler.add_job("b.txt", 3).unwrap();
/// scheduler.add_job("c.txt", 8).unwrap();
///
/// let result = scheduler.run_fcfs().unwrap();
/// assert_eq!(result.waiting_times, vec![0, 5, 8]);
///
/// let rr = scheduler.run_round_robin(4).unwrap();
/// assert_eq!(rr.turnaround_times.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    jobs: Vec<Job>,
    thresholds: SuggestionThresholds,
}

impl Scheduler {
    /// Creates an empty scheduler with default suggestion thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the thresholds used by [`Scheduler::suggest_policy`].
    pub fn with_thresholds(mut self, thresholds: SuggestionThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Appends a job.
    ///
    /// Fails with `InvalidInput` if `burst_time` is negative; the job set
    /// is left unchanged.
    pub fn add_job(&mut self, id: impl Into<String>, burst_time: i64) -> Result<()> {
        let burst_time = validate_burst(burst_time)?;
        let job = Job::new(id, burst_time);
        debug!("added job '{}' (burst {})", job.id, job.burst_time);
        self.jobs.push(job);
        Ok(())
    }

    /// Removes all jobs.
    pub fn clear(&mut self) {
        debug!("cleared {} jobs", self.jobs.len());
        self.jobs.clear();
    }

    /// Number of accumulated jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no jobs have been added.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Immutable copy of the current jobs.
    pub fn snapshot(&self) -> JobSet {
        JobSet::from(self.jobs.clone())
    }

    /// Runs any policy over the current jobs.
    pub fn run(&self, policy: &dyn SchedulingPolicy) -> Result<ScheduleResult> {
        policy.schedule(&self.snapshot())
    }

    /// Runs First-Come-First-Served.
    pub fn run_fcfs(&self) -> Result<ScheduleResult> {
        self.run(&Fcfs)
    }

    /// Runs non-preemptive Shortest-Job-First.
    pub fn run_sjf(&self) -> Result<ScheduleResult> {
        self.run(&Sjf)
    }

    /// Runs Round Robin.
    ///
    /// The quantum is checked before the job set, so a bad quantum reports
    /// `InvalidInput` even when there are no jobs.
    pub fn run_round_robin(&self, quantum: i64) -> Result<ScheduleResult> {
        let policy = RoundRobin::new(quantum)?;
        self.run(&policy)
    }

    /// Advisory policy choice for the current jobs.
    pub fn suggest_policy(&self) -> PolicyName {
        self.suggestion().policy
    }

    /// Advisory policy choice with its rationale.
    pub fn suggestion(&self) -> Suggestion {
        suggest_policy_with(&self.snapshot(), &self.thresholds)
    }
}
