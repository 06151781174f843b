//! Advisory policy suggestion.
//!
//! A cheap heuristic over the job set:
//! 1. Few jobs: FCFS (simple and fair).
//! 2. Otherwise, bursts of similar size: Round Robin.
//! 3. Otherwise: SJF (minimizes average waiting time).
//!
//! The cut-offs are tuning values with no deeper rationale, so they are
//! configuration rather than constants baked into the rule.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::JobSet;
use crate::policy::PolicyName;

/// Default job-count cut-off at or below which FCFS is suggested.
pub const DEFAULT_MAX_JOBS_FOR_FCFS: usize = 5;

/// Default burst spread at or below which Round Robin is suggested.
pub const DEFAULT_MAX_SPREAD_FOR_ROUND_ROBIN: u64 = 2;

/// Tuning values for [`suggest_policy_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionThresholds {
    /// FCFS is suggested when the job count is at most this.
    pub max_jobs_for_fcfs: usize,
    /// Round Robin is suggested when `max(burst) - min(burst)` is at most this.
    pub max_spread_for_round_robin: u64,
}

impl SuggestionThresholds {
    /// Sets the FCFS job-count cut-off.
    pub fn with_max_jobs_for_fcfs(mut self, max_jobs: usize) -> Self {
        self.max_jobs_for_fcfs = max_jobs;
        self
    }

    /// Sets the Round Robin burst-spread cut-off.
    pub fn with_max_spread_for_round_robin(mut self, max_spread: u64) -> Self {
        self.max_spread_for_round_robin = max_spread;
        self
    }
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            max_jobs_for_fcfs: DEFAULT_MAX_JOBS_FOR_FCFS,
            max_spread_for_round_robin: DEFAULT_MAX_SPREAD_FOR_ROUND_ROBIN,
        }
    }
}

/// A suggested policy and the reason it was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Suggested policy.
    pub policy: PolicyName,
    /// Short human-readable rationale.
    pub rationale: &'static str,
}

/// Suggests a policy using the default thresholds.
pub fn suggest_policy(jobs: &JobSet) -> PolicyName {
    suggest_policy_with(jobs, &SuggestionThresholds::default()).policy
}

/// Suggests a policy using custom thresholds.
///
/// An empty job set counts as "few jobs" and yields FCFS.
pub fn suggest_policy_with(jobs: &JobSet, thresholds: &SuggestionThresholds) -> Suggestion {
    let suggestion = if jobs.len() <= thresholds.max_jobs_for_fcfs {
        Suggestion {
            policy: PolicyName::Fcfs,
            rationale: "few jobs, simple and fair",
        }
    } else if jobs.burst_spread() <= thresholds.max_spread_for_round_robin {
        Suggestion {
            policy: PolicyName::RoundRobin,
            rationale: "similar burst times, fair time sharing",
        }
    } else {
        Suggestion {
            policy: PolicyName::Sjf,
            rationale: "optimal for minimizing waiting time",
        }
    };

    debug!(
        "suggested {} for {} jobs (spread {})",
        suggestion.policy,
        jobs.len(),
        jobs.burst_spread()
    );
    suggestion
}
