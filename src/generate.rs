//! Random burst generation.
//!
//! Stand-in for measuring real work: each job gets a burst drawn uniformly
//! from a configured range. This belongs to the caller's side of the
//! boundary. Policies never draw random numbers; they only see the
//! resulting [`JobSet`].
//!
//! Pass a seeded RNG for reproducible batches.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::{Job, JobSet};

/// Uniform burst-time generator over `[min_burst, max_burst)`.
///
/// # Example
///
/// ```
/// use burst_sched::generate::BurstGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let jobs = BurstGenerator::default()
///     .generate(["a.txt", "b.txt"], &mut rng)
///     .unwrap();
/// assert_eq!(jobs.len(), 2);
/// assert!(jobs.iter().all(|j| (1..10).contains(&j.burst_time)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstGenerator {
    /// Smallest burst that can be drawn.
    pub min_burst: u64,
    /// Exclusive upper bound.
    pub max_burst: u64,
}

impl BurstGenerator {
    /// Creates a generator over `[min_burst, max_burst)`.
    ///
    /// Fails with `InvalidInput` if the range is empty.
    pub fn new(min_burst: u64, max_burst: u64) -> Result<Self> {
        let generator = Self {
            min_burst,
            max_burst,
        };
        generator.check_range()?;
        Ok(generator)
    }

    /// Draws a single burst time.
    pub fn burst<R: Rng>(&self, rng: &mut R) -> Result<u64> {
        self.check_range()?;
        Ok(rng.random_range(self.min_burst..self.max_burst))
    }

    /// Builds a job set, one job per identifier, in the given order.
    pub fn generate<I, S, R>(&self, ids: I, rng: &mut R) -> Result<JobSet>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Rng,
    {
        self.check_range()?;
        Ok(ids
            .into_iter()
            .map(|id| Job::new(id, rng.random_range(self.min_burst..self.max_burst)))
            .collect())
    }

    fn check_range(&self) -> Result<()> {
        if self.min_burst < self.max_burst {
            Ok(())
        } else {
            Err(SchedulerError::InvalidInput(format!(
                "burst range [{}, {}) is empty",
                self.min_burst, self.max_burst
            )))
        }
    }
}

impl Default for BurstGenerator {
    fn default() -> Self {
        Self {
            min_burst: 1,
            max_burst: 10,
        }
    }
}
