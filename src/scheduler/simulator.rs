//! Discrete-time uniprocessor simulator.
//!
//! # Algorithm
//!
//! One loop serves every discipline:
//!
//! 1. Start the clock at the earliest arrival.
//! 2. Admit every pending process with `arrival_time <= clock`, in arrival
//!    order (ties by input order).
//! 3. If nothing is ready, jump to the next arrival and emit an idle step.
//! 4. Order the ready queue with the discipline's [`RuleEngine`] and pop
//!    the head.
//! 5. Run it for one slice (to completion, or one quantum for Round-Robin),
//!    then emit a step holding value snapshots of CPU, queue and completed
//!    list.
//! 6. Round-Robin admits arrivals that happened during the slice, then puts
//!    an unfinished process at the tail.
//!
//! # Complexity
//! O(s * n log n) where s = dispatches and n = ready-queue length.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::collections::VecDeque;

use tracing::{debug, info, instrument, trace};

use super::{Algorithm, SimulationConfig};
use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::error::SimulationResult;
use crate::models::{ExecutionStep, Process, Trace};
use crate::validation::validate_input;

/// Runs scheduling simulations for one configuration.
///
/// Holds no per-run state; the same simulator can run any number of
/// process lists, in parallel if desired.
///
/// # Example
///
/// ```
/// use u_cpu_sched::models::Process;
/// use u_cpu_sched::scheduler::{Simulator, SimulationConfig};
///
/// let processes = vec![
///     Process::new("a").with_arrival(0).with_burst(5),
///     Process::new("b").with_arrival(0).with_burst(3),
/// ];
/// let trace = Simulator::new(SimulationConfig::round_robin(2))
///     .run(&processes)
///     .unwrap();
/// assert_eq!(trace.completion_order(), vec!["b", "a"]);
/// assert_eq!(trace.total_time(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    rule_engine: RuleEngine,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            rule_engine: config.algorithm.rule_engine(),
            config,
        }
    }

    /// Replaces the discipline's default ready-queue ordering.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `processes` to completion and returns the full trace.
    ///
    /// The input slice is never modified; the run works on fresh copies.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInput`](crate::error::SimulationError::InvalidInput)
    /// if validation fails. No partial trace is produced.
    #[instrument(
        skip_all,
        fields(algorithm = %self.config.algorithm, processes = processes.len())
    )]
    pub fn run(&self, processes: &[Process]) -> SimulationResult<Trace> {
        validate_input(processes, &self.config.algorithm)?;

        if processes.is_empty() {
            debug!("empty process list, returning empty trace");
            return Ok(Trace::new());
        }

        let algorithm = self.config.algorithm;
        let fine = self.config.fine_stepping();
        let total = processes.len();
        let mut run = RunState::new(processes);

        while run.completed.len() < total {
            run.admit_arrivals();

            if run.ready.is_empty() {
                let Some(next_arrival) = run.next_arrival() else {
                    break;
                };
                debug!(from = run.clock, to = next_arrival, "cpu idle, advancing clock");
                run.clock = next_arrival;
                run.emit_idle();
                continue;
            }

            let mut context = SchedulingContext::at_time(run.clock);
            if let Some(quantum) = algorithm.quantum() {
                context = context.with_quantum(quantum);
            }
            self.rule_engine.order_queue(&mut run.ready, &context);

            let Some(mut current) = run.ready.pop_front() else {
                break;
            };
            current.mark_started(run.clock);

            let slice_start = run.clock;
            let slice = algorithm.slice_for(current.remaining_time);
            debug!(
                process = %current.id,
                at = slice_start,
                slice,
                remaining = current.remaining_time,
                "dispatch"
            );

            if fine {
                for tick in 0..slice {
                    let mut snapshot = current.clone();
                    snapshot.remaining_time -= tick;
                    snapshot.burst_time = slice;
                    run.emit_running(slice_start + tick, slice_start, snapshot);
                }
            }

            run.clock += slice;
            current.remaining_time -= slice;

            if algorithm.is_preemptive() {
                run.admit_arrivals();
            }

            let finished = current.remaining_time == 0;
            if finished {
                current.mark_completed(run.clock);
            }

            let mut snapshot = current.clone();
            snapshot.burst_time = slice;

            if finished {
                debug!(process = %current.id, at = run.clock, "completed");
                run.completed.push(current);
            } else {
                run.ready.push_back(current);
            }
            run.emit_running(run.clock, slice_start, snapshot);
        }

        info!(
            steps = run.trace.len(),
            elapsed = run.trace.total_time(),
            "simulation finished"
        );
        Ok(run.trace)
    }
}

/// Mutable state of one run. Dropped when the run returns its trace.
struct RunState {
    pending: VecDeque<Process>,
    ready: VecDeque<Process>,
    completed: Vec<Process>,
    clock: i64,
    trace: Trace,
}

impl RunState {
    fn new(processes: &[Process]) -> Self {
        let mut pending: Vec<Process> = processes.iter().map(Process::fresh_copy).collect();
        pending.sort_by_key(|p| p.arrival_time);
        let clock = pending.first().map(|p| p.arrival_time).unwrap_or(0);

        Self {
            pending: pending.into(),
            ready: VecDeque::new(),
            completed: Vec::new(),
            clock,
            trace: Trace::new(),
        }
    }

    fn admit_arrivals(&mut self) {
        while self
            .pending
            .front()
            .is_some_and(|p| p.arrival_time <= self.clock)
        {
            if let Some(process) = self.pending.pop_front() {
                self.ready.push_back(process);
            }
        }
    }

    fn next_arrival(&self) -> Option<i64> {
        self.pending.front().map(|p| p.arrival_time)
    }

    fn emit_idle(&mut self) {
        let step = ExecutionStep::idle(self.clock, self.ready_snapshot(), self.completed.clone());
        trace!(time = step.time, "idle step");
        self.trace.push(step);
    }

    fn emit_running(&mut self, time: i64, slice_start: i64, running: Process) {
        let step = ExecutionStep::running(
            time,
            slice_start,
            running,
            self.ready_snapshot(),
            self.completed.clone(),
        );
        trace!(time, process = step.running_id(), "running step");
        self.trace.push(step);
    }

    fn ready_snapshot(&self) -> Vec<Process> {
        self.ready.iter().cloned().collect()
    }
}

/// Simulates `processes` under `config`.
pub fn simulate(processes: &[Process], config: &SimulationConfig) -> SimulationResult<Trace> {
    Simulator::new(*config).run(processes)
}

/// First-Come-First-Served with reference granularity.
pub fn simulate_fcfs(processes: &[Process]) -> SimulationResult<Trace> {
    simulate(processes, &SimulationConfig::new(Algorithm::Fcfs))
}

/// Non-preemptive Shortest Job First with reference (per-tick) granularity.
pub fn simulate_sjf(processes: &[Process]) -> SimulationResult<Trace> {
    simulate(processes, &SimulationConfig::new(Algorithm::Sjf))
}

/// Non-preemptive static priority with reference granularity.
pub fn simulate_priority(processes: &[Process]) -> SimulationResult<Trace> {
    simulate(processes, &SimulationConfig::new(Algorithm::Priority))
}

/// Round-Robin with the given quantum and reference granularity.
pub fn simulate_round_robin(processes: &[Process], quantum: i64) -> SimulationResult<Trace> {
    simulate(processes, &SimulationConfig::round_robin(quantum))
}
