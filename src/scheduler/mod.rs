//! Scheduling simulation and KPI evaluation.
//!
//! Provides the shared discrete-time simulator, its configuration, and
//! trace metrics.
//!
//! # Algorithms
//!
//! | Discipline | Ready-queue rule | Preemptive | Reference steps |
//! |------------|------------------|------------|-----------------|
//! | FCFS | FIFO | no | one per dispatch |
//! | SJF | SPT | no | one per tick + completion |
//! | Priority | PRIORITY | no | one per dispatch |
//! | Round-Robin | FIFO | yes (quantum) | one per slice |
//!
//! # KPI
//!
//! `TraceMetrics` computes total time, average turnaround, waiting and
//! response time, throughput and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod config;
mod kpi;
mod simulator;

pub use config::{Algorithm, SimulationConfig, StepGranularity};
pub use kpi::{ProcessMetrics, TraceMetrics};
pub use simulator::{
    simulate, simulate_fcfs, simulate_priority, simulate_round_robin, simulate_sjf, Simulator,
};
