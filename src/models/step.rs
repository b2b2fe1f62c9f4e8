//! Execution step model.
//!
//! A step is one observable instant of a simulation: who holds the CPU,
//! who is waiting, and who has finished. Steps hold value snapshots, so
//! nothing the engine does after emitting a step can change it.

use serde::{Deserialize, Serialize};

use super::Process;

/// One recorded instant of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
    /// Simulated clock value of this step.
    pub time: i64,
    /// Snapshot of the process on the CPU, `None` when the CPU is idle.
    ///
    /// Its `burst_time` is the length of the executed slice, not the
    /// process's total burst.
    pub running_process: Option<Process>,
    /// Waiting processes in the order they would next be considered.
    pub ready_queue: Vec<Process>,
    /// Processes finished so far, in completion order.
    pub completed_processes: Vec<Process>,
    /// Clock value at which the running slice was dispatched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slice_start: Option<i64>,
}

impl ExecutionStep {
    /// Creates an idle step (no running process).
    pub fn idle(time: i64, ready_queue: Vec<Process>, completed_processes: Vec<Process>) -> Self {
        Self {
            time,
            running_process: None,
            ready_queue,
            completed_processes,
            slice_start: None,
        }
    }

    /// Creates a step with a running process dispatched at `slice_start`.
    pub fn running(
        time: i64,
        slice_start: i64,
        running: Process,
        ready_queue: Vec<Process>,
        completed_processes: Vec<Process>,
    ) -> Self {
        Self {
            time,
            running_process: Some(running),
            ready_queue,
            completed_processes,
            slice_start: Some(slice_start),
        }
    }

    /// Whether the CPU is idle at this step.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.running_process.is_none()
    }

    /// ID of the running process, if any.
    pub fn running_id(&self) -> Option<&str> {
        self.running_process.as_ref().map(|p| p.id.as_str())
    }

    /// Number of processes completed at this step.
    pub fn completed_count(&self) -> usize {
        self.completed_processes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_step() {
        let step = ExecutionStep::idle(4, Vec::new(), Vec::new());
        assert!(step.is_idle());
        assert_eq!(step.running_id(), None);
        assert_eq!(step.slice_start, None);
    }

    #[test]
    fn test_running_step() {
        let p = Process::new("p1").with_burst(3);
        let step = ExecutionStep::running(3, 0, p.clone(), Vec::new(), vec![p]);
        assert!(!step.is_idle());
        assert_eq!(step.running_id(), Some("p1"));
        assert_eq!(step.slice_start, Some(0));
        assert_eq!(step.completed_count(), 1);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut p = Process::new("p1").with_burst(5);
        let step = ExecutionStep::running(2, 0, p.clone(), vec![p.clone()], Vec::new());
        p.remaining_time = 0;
        assert_eq!(step.running_process.as_ref().unwrap().remaining_time, 5);
        assert_eq!(step.ready_queue[0].remaining_time, 5);
    }
}
