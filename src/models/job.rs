//! Job and job-set models.
//!
//! A job is a unit of work with a fixed burst time. A job set is the
//! ordered batch handed to a scheduling policy.
//!
//! # Time Representation
//! All times are abstract work units relative to t=0. Every job in a set
//! is considered to have arrived at t=0; list order is arrival order.

use serde::{Deserialize, Serialize};

/// A job to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier. Not required to be unique.
    pub id: String,
    /// Processing time required by the job (work units).
    pub burst_time: u64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, burst_time: u64) -> Self {
        Self {
            id: id.into(),
            burst_time,
        }
    }
}

/// An ordered, immutable batch of jobs.
///
/// Order is significant: it is the service order for FCFS and the
/// tie-breaking order for SJF and round robin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    /// Creates an empty job set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job to the end of the set.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Builds a job set from raw burst times, naming jobs `J0`, `J1`, ...
    pub fn from_bursts(bursts: &[u64]) -> Self {
        bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| Job::new(format!("J{i}"), b))
            .collect()
    }

    /// Jobs in arrival order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Iterates over jobs in arrival order.
    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    /// Burst times in arrival order.
    pub fn burst_times(&self) -> Vec<u64> {
        self.jobs.iter().map(|j| j.burst_time).collect()
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the set has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Sum of all burst times, or `None` if it overflows `u64`.
    pub fn total_burst(&self) -> Option<u64> {
        self.jobs
            .iter()
            .try_fold(0u64, |acc, j| acc.checked_add(j.burst_time))
    }

    /// Difference between the largest and smallest burst (0 if empty).
    pub fn burst_spread(&self) -> u64 {
        let min = self.jobs.iter().map(|j| j.burst_time).min();
        let max = self.jobs.iter().map(|j| j.burst_time).max();
        match (min, max) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }
}

impl From<Vec<Job>> for JobSet {
    fn from(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }
}

impl FromIterator<Job> for JobSet {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        Self {
            jobs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a JobSet {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_set_builder() {
        let jobs = JobSet::new()
            .with_job(Job::new("report.pdf", 4))
            .with_job(Job::new("photo.png", 7));

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs.jobs()[0].id, "report.pdf");
        assert_eq!(jobs.burst_times(), vec![4, 7]);
        assert_eq!(jobs.total_burst(), Some(11));
        assert_eq!(
            JobSet::from_bursts(&[u64::MAX, 1]).total_burst(),
            None
        );
    }

    #[test]
    fn test_from_bursts_names_jobs() {
        let jobs = JobSet::from_bursts(&[5, 3]);
        assert_eq!(jobs.jobs()[0], Job::new("J0", 5));
        assert_eq!(jobs.jobs()[1], Job::new("J1", 3));
    }

    #[test]
    fn test_duplicate_ids_are_distinct_jobs() {
        let jobs = JobSet::new()
            .with_job(Job::new("dup", 1))
            .with_job(Job::new("dup", 1));
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_burst_spread() {
        assert_eq!(JobSet::new().burst_spread(), 0);
        assert_eq!(JobSet::from_bursts(&[4]).burst_spread(), 0);
        assert_eq!(JobSet::from_bursts(&[4, 9, 2]).burst_spread(), 7);
    }

    #[test]
    fn test_serde_transparent() {
        let jobs = JobSet::from_bursts(&[2]);
        let json = serde_json::to_string(&jobs).unwrap();
        assert_eq!(json, r#"[{"id":"J0","burst_time":2}]"#);

        let back: JobSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, jobs);
    }

    #[test]
    fn test_serde_rejects_negative_burst() {
        let parsed: Result<JobSet, _> = serde_json::from_str(r#"[{"id":"x","burst_time":-1}]"#);
        assert!(parsed.is_err());
    }
}
