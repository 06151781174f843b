//! Batch-job scheduling simulator.
//!
//! Given jobs with fixed burst times, computes per-job waiting and
//! turnaround times, plus their averages, under classical CPU-scheduling
//! policies. Burst times are supplied, never measured; nothing executes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `JobSet`, `ScheduleResult`, `Slice`
//! - **`policy`**: `SchedulingPolicy` trait with `Fcfs`, `Sjf`, `RoundRobin`
//! - **`scheduler`**: `Scheduler` job accumulator, `ScheduleKpi`, policy comparison
//! - **`suggest`**: Advisory policy suggestion with configurable thresholds
//! - **`generate`**: Seeded random burst generation for callers and tests
//! - **`validation`**: Boundary checks (negative bursts, quanta, empty sets)
//!
//! # Example
//!
//! ```
//! use burst_sched::scheduler::Scheduler;
//! use burst_sched::policy::PolicyName;
//!
//! let mut scheduler = Scheduler::new();
//! for (name, burst) in [("a", 6), ("b", 8), ("c", 7), ("d", 3)] {
//!     scheduler.add_job(name, burst).unwrap();
//! }
//!
//! let sjf = scheduler.run_sjf().unwrap();
//! assert_eq!(sjf.waiting_times, vec![3, 16, 9, 0]);
//! assert_eq!(scheduler.suggest_policy(), PolicyName::Fcfs);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod generate;
pub mod models;
pub mod policy;
pub mod scheduler;
pub mod suggest;
pub mod validation;

pub use error::{Result, SchedulerError};
