//! Uniprocessor CPU scheduling simulator.
//!
//! Turns a static process list into a deterministic, replayable trace of
//! scheduling decisions under FCFS, SJF, Priority or Round-Robin, and
//! derives the classic metrics from it. Rendering the trace is left to
//! the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionStep`, `Trace`,
//!   `TimelineSegment`, `TraceCursor`
//! - **`dispatching`**: Ready-queue ordering rules and the `RuleEngine`
//! - **`scheduler`**: The shared simulator, `SimulationConfig`, `TraceMetrics`
//! - **`validation`**: Input checks (IDs, burst, arrival, priority, quantum)
//! - **`workload`**: Seeded synthetic process lists
//!
//! # Example
//!
//! ```
//! use u_cpu_sched::models::Process;
//! use u_cpu_sched::scheduler::{simulate_priority, TraceMetrics};
//!
//! let processes = vec![
//!     Process::new("a").with_burst(5).with_priority(2),
//!     Process::new("b").with_burst(3).with_priority(1),
//! ];
//! let trace = simulate_priority(&processes)?;
//! assert_eq!(trace.completion_order(), vec!["b", "a"]);
//!
//! let metrics = TraceMetrics::calculate(&trace);
//! assert_eq!(metrics.total_time, 8);
//! # Ok::<(), u_cpu_sched::error::SimulationError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimulationError, SimulationResult};
pub use models::{ExecutionStep, Process, Trace};
pub use scheduler::{simulate, Algorithm, SimulationConfig, StepGranularity, TraceMetrics};
