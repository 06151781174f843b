//! Round Robin with a fixed quantum.

use std::num::NonZeroU64;

use log::trace;

use super::{log_run, PolicyName, SchedulingPolicy};
use crate::error::{Result, SchedulerError};
use crate::models::{JobSet, ScheduleResult, Slice};
use crate::validation::{ensure_schedulable, validate_quantum};

/// Round Robin.
///
/// # Algorithm
/// Sweeps the jobs in input order, over and over, until all are finished.
/// On each visit an unfinished job either
/// - runs a full quantum and is preempted (`remaining > quantum`), or
/// - runs its remaining burst and finishes, with
///   `waiting = clock_at_completion - burst`.
///
/// This is a repeated full sweep, not a FIFO ready queue with
/// re-admission. The two agree only when every job arrives at t=0, which
/// is always the case here.
///
/// A zero-burst job is not skipped: it finishes on its first visit at no
/// cost, waiting for whatever time has elapsed by then.
///
/// # Complexity
/// O(n * max(burst) / quantum).
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    /// Creates a round-robin policy.
    ///
    /// Fails with `InvalidInput` if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self> {
        Ok(Self {
            quantum: validate_quantum(quantum)?,
        })
    }

    /// Creates a round-robin policy from an already-validated quantum.
    pub fn with_quantum(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    /// Time slice granted per visit.
    pub fn quantum(&self) -> u64 {
        self.quantum.get()
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> PolicyName {
        PolicyName::RoundRobin
    }

    fn schedule(&self, jobs: &JobSet) -> Result<ScheduleResult> {
        ensure_schedulable(jobs)?;

        let quantum = self.quantum.get();
        let bursts = jobs.burst_times();
        let mut remaining = bursts.clone();
        let mut waiting: Vec<Option<u64>> = vec![None; bursts.len()];
        let mut pending = bursts.len();
        let mut timeline: Vec<Slice> = Vec::new();
        let mut clock: u64 = 0;

        while pending > 0 {
            for (i, (left, wait)) in remaining.iter_mut().zip(waiting.iter_mut()).enumerate() {
                if wait.is_some() {
                    continue;
                }

                let start = clock;
                let run = (*left).min(quantum);
                clock = clock
                    .checked_add(run)
                    .ok_or_else(SchedulerError::burst_overflow)?;
                *left -= run;
                if *left == 0 {
                    *wait = Some(clock - bursts[i]);
                    pending -= 1;
                }

                trace!("rr q={quantum}: job {i} ran [{start}, {clock}), {left} left");
                // Back-to-back slices of the same job collapse into one.
                match timeline.last_mut() {
                    Some(last) if last.job_index == i && last.end == start => last.end = clock,
                    _ => timeline.push(Slice::new(i, start, clock)),
                }
            }
        }

        let waiting: Vec<u64> = waiting.into_iter().flatten().collect();
        let result =
            ScheduleResult::from_waiting_times(PolicyName::RoundRobin, jobs, waiting, timeline)?;

        log_run(&result);
        Ok(result)
    }

    fn description(&self) -> &'static str {
        "Round Robin (full sweep, fixed quantum)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rr_basic() {
        // t=4 J0 preempted, t=8 J1 done (w=4), t=12 J2 preempted,
        // t=16 J0 preempted, t=18 J2 done (w=12), t=20 J0 done (w=10).
        let jobs = JobSet::from_bursts(&[10, 4, 6]);
        let result = RoundRobin::new(4).unwrap().schedule(&jobs).unwrap();

        assert_eq!(result.waiting_times, vec![10, 4, 12]);
        assert_eq!(result.turnaround_times, vec![20, 8, 18]);
        assert!((result.avg_waiting_time - 26.0 / 3.0).abs() < 1e-10);
        assert!((result.avg_turnaround_time - 46.0 / 3.0).abs() < 1e-10);
        assert_eq!(
            result.timeline,
            vec![
                Slice::new(0, 0, 4),
                Slice::new(1, 4, 8),
                Slice::new(2, 8, 12),
                Slice::new(0, 12, 16),
                Slice::new(2, 16, 18),
                Slice::new(0, 18, 20),
            ]
        );
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        use crate::policy::Fcfs;

        let jobs = JobSet::from_bursts(&[5, 3, 8]);
        let rr = RoundRobin::new(100).unwrap().schedule(&jobs).unwrap();
        let fcfs = Fcfs.schedule(&jobs).unwrap();
        assert_eq!(rr.waiting_times, fcfs.waiting_times);
        assert_eq!(rr.turnaround_times, fcfs.turnaround_times);
    }

    #[test]
    fn test_rr_quantum_one() {
        // Sweeps: J0,J1 | J0,J1(done t=4) | J0(done t=5)
        let jobs = JobSet::from_bursts(&[3, 2]);
        let result = RoundRobin::new(1).unwrap().schedule(&jobs).unwrap();
        assert_eq!(result.turnaround_times, vec![5, 4]);
        assert_eq!(result.waiting_times, vec![2, 2]);
    }

    #[test]
    fn test_rr_zero_burst_waits_for_elapsed_time() {
        // J0 runs [0,2), then J1 (burst 0) completes at t=2 on its first visit.
        let jobs = JobSet::from_bursts(&[3, 0]);
        let result = RoundRobin::new(2).unwrap().schedule(&jobs).unwrap();
        assert_eq!(result.waiting_times, vec![0, 2]);
        assert_eq!(result.turnaround_times, vec![3, 2]);
        assert_eq!(result.slices_for(1).count(), 1);
    }

    #[test]
    fn test_rr_all_zero_bursts() {
        let result = RoundRobin::new(3)
            .unwrap()
            .schedule(&JobSet::from_bursts(&[0, 0]))
            .unwrap();
        assert_eq!(result.waiting_times, vec![0, 0]);
        assert_eq!(result.avg_turnaround_time, 0.0);
    }

    #[test]
    fn test_rr_single_long_job_is_one_slice() {
        let rr = RoundRobin::new(1).unwrap();
        let result = rr.schedule(&JobSet::from_bursts(&[100_000])).unwrap();
        assert_eq!(result.timeline, vec![Slice::new(0, 0, 100_000)]);
        assert_eq!(result.waiting_times, vec![0]);
    }

    #[test]
    fn test_rr_tail_slices_merge() {
        // After the first sweep only J0 is left; its remaining slices merge.
        let rr = RoundRobin::new(1).unwrap();
        let result = rr.schedule(&JobSet::from_bursts(&[4, 1])).unwrap();
        assert_eq!(
            result.timeline,
            vec![Slice::new(0, 0, 1), Slice::new(1, 1, 2), Slice::new(0, 2, 5)]
        );
        assert_eq!(result.waiting_times, vec![1, 1]);
    }

    #[test]
    fn test_rr_overflowing_clock() {
        let max = i64::MAX as u64;
        let jobs = JobSet::from_bursts(&[max, max, max]);
        let err = RoundRobin::new(i64::MAX).unwrap().schedule(&jobs).unwrap_err();
        assert_eq!(err, SchedulerError::burst_overflow());
    }

    #[test]
    fn test_rr_invalid_quantum() {
        assert!(matches!(
            RoundRobin::new(0),
            Err(SchedulerError::InvalidInput(_))
        ));
        assert!(matches!(
            RoundRobin::new(-5),
            Err(SchedulerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rr_empty() {
        let rr = RoundRobin::new(4).unwrap();
        assert_eq!(rr.schedule(&JobSet::new()).unwrap_err(), SchedulerError::EmptyJobSet);
    }

    #[test]
    fn test_rr_idempotent() {
        let jobs = JobSet::from_bursts(&[10, 4, 6]);
        let rr = RoundRobin::with_quantum(NonZeroU64::new(3).unwrap());
        assert_eq!(rr.quantum(), 3);
        assert_eq!(rr.schedule(&jobs).unwrap(), rr.schedule(&jobs).unwrap());
    }
}
