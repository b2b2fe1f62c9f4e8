//! Trace metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from the final step of a
//! trace. Read-only: the deriver holds no state and never touches the trace.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total time | Clock of the last step |
//! | Avg turnaround | Mean of `end - arrival` |
//! | Avg waiting | Mean of `turnaround - burst` |
//! | Avg response | Mean of `start - arrival` |
//! | Throughput | Completed / total time |
//! | CPU utilization | Sum of bursts / total time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ExecutionStep, Process, Trace};

/// Per-process figures, in completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    /// Process ID.
    pub id: String,
    /// Process name.
    pub name: String,
    /// Presentation color.
    pub color: String,
    /// Full burst time.
    pub burst_time: i64,
    /// Ticks spent ready but not running.
    pub waiting_time: i64,
    /// Ticks from arrival to completion.
    pub turnaround_time: i64,
    /// Ticks from arrival to first dispatch.
    pub response_time: i64,
}

impl ProcessMetrics {
    fn from_process(p: &Process) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            color: p.color.clone(),
            burst_time: p.burst_time,
            waiting_time: p.waiting_time.unwrap_or(0),
            turnaround_time: p.turnaround_time.unwrap_or(0),
            response_time: p.start_time.map(|s| s - p.arrival_time).unwrap_or(0),
        }
    }
}

/// Aggregate indicators of a completed run.
///
/// An empty trace yields all zeros. When total time is 0, throughput and
/// utilization are defined as 0.0 rather than dividing by zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceMetrics {
    /// Clock of the last step.
    pub total_time: i64,
    /// Number of completed processes.
    pub completed_count: usize,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Fraction of elapsed time the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Per-process rows in completion order.
    pub per_process: Vec<ProcessMetrics>,
}

impl TraceMetrics {
    /// Computes metrics from a whole trace (uses its final step).
    pub fn calculate(trace: &Trace) -> Self {
        trace
            .final_step()
            .map(Self::from_final_step)
            .unwrap_or_default()
    }

    /// Computes metrics from the last step of a completed trace.
    pub fn from_final_step(step: &ExecutionStep) -> Self {
        let completed = &step.completed_processes;
        let total_time = step.time;
        let per_process: Vec<ProcessMetrics> =
            completed.iter().map(ProcessMetrics::from_process).collect();

        let count = per_process.len();
        let mean = |sum: i64| {
            if count == 0 {
                0.0
            } else {
                sum as f64 / count as f64
            }
        };
        let per_tick = |value: f64| {
            if total_time <= 0 {
                0.0
            } else {
                value / total_time as f64
            }
        };

        let total_turnaround: i64 = per_process.iter().map(|p| p.turnaround_time).sum();
        let total_waiting: i64 = per_process.iter().map(|p| p.waiting_time).sum();
        let total_response: i64 = per_process.iter().map(|p| p.response_time).sum();
        let total_burst: i64 = per_process.iter().map(|p| p.burst_time).sum();

        Self {
            total_time,
            completed_count: count,
            average_turnaround_time: mean(total_turnaround),
            average_waiting_time: mean(total_waiting),
            average_response_time: mean(total_response),
            throughput: per_tick(count as f64),
            cpu_utilization: per_tick(total_burst as f64),
            per_process,
        }
    }

    /// Metrics row for one process.
    pub fn process(&self, id: &str) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{simulate_fcfs, simulate_round_robin};

    fn make(id: &str, arrival: i64, burst: i64) -> Process {
        Process::new(id)
            .with_name(id)
            .with_arrival(arrival)
            .with_burst(burst)
    }

    #[test]
    fn test_metrics_basic() {
        let trace = simulate_fcfs(&[make("a", 0, 4), make("b", 1, 2)]).unwrap();
        let m = TraceMetrics::calculate(&trace);

        assert_eq!(m.total_time, 6);
        assert_eq!(m.completed_count, 2);
        // a: tat 4, wait 0; b: tat 5, wait 3
        assert!((m.average_turnaround_time - 4.5).abs() < 1e-10);
        assert!((m.average_waiting_time - 1.5).abs() < 1e-10);
        assert!((m.average_response_time - 1.5).abs() < 1e-10);
        assert!((m.throughput - 2.0 / 6.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_with_idle_time() {
        let trace = simulate_fcfs(&[make("a", 0, 2), make("b", 6, 2)]).unwrap();
        let m = TraceMetrics::calculate(&trace);
        assert_eq!(m.total_time, 8);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_use_full_round_robin_burst() {
        let trace = simulate_round_robin(&[make("a", 0, 5), make("b", 0, 3)], 2).unwrap();
        let m = TraceMetrics::calculate(&trace);

        let b = m.process("b").unwrap();
        assert_eq!(b.burst_time, 3);
        assert_eq!(b.waiting_time, 4);
        assert_eq!(b.response_time, 2);
        // a: tat 8, wait 3; b: tat 7, wait 4
        assert!((m.average_turnaround_time - 7.5).abs() < 1e-10);
        assert!((m.average_waiting_time - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty_trace() {
        let m = TraceMetrics::calculate(&Trace::new());
        assert_eq!(m.total_time, 0);
        assert_eq!(m.completed_count, 0);
        assert_eq!(m.throughput, 0.0);
        assert_eq!(m.cpu_utilization, 0.0);
        assert!(m.per_process.is_empty());
    }

    #[test]
    fn test_metrics_zero_elapsed_time() {
        let step = ExecutionStep::idle(0, Vec::new(), Vec::new());
        let m = TraceMetrics::from_final_step(&step);
        assert_eq!(m.throughput, 0.0);
        assert!(m.throughput.is_finite());
        assert_eq!(m.average_waiting_time, 0.0);
    }

    #[test]
    fn test_per_process_order() {
        let trace = simulate_fcfs(&[make("late", 3, 1), make("early", 0, 1)]).unwrap();
        let m = TraceMetrics::calculate(&trace);
        let order: Vec<&str> = m.per_process.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["early", "late"]);
    }
}
