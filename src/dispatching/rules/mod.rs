//! Built-in dispatching rules.
//!
//! | Rule | Discipline | Score |
//! |------|------------|-------|
//! | `Fifo` | FCFS, Round-Robin | constant (queue order) |
//! | `Spt` | SJF | burst time |
//! | `PriorityRule` | Priority | priority value |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// First In, First Out.
///
/// Scores every process equally, so the stable sort leaves the queue in
/// admission order and re-queued processes stay at the tail.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, _process: &Process, _context: &SchedulingContext) -> RuleScore {
        0.0
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Shortest Processing Time (shortest job first).
///
/// Prioritizes processes with the smaller total burst.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time as f64
    }

    fn exact_key(&self, process: &Process, _context: &SchedulingContext) -> Option<i64> {
        Some(process.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Static priority. Lower value = more urgent.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule;

impl DispatchingRule for PriorityRule {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority as f64
    }

    fn exact_key(&self, process: &Process, _context: &SchedulingContext) -> Option<i64> {
        Some(i64::from(process.priority))
    }

    fn description(&self) -> &'static str {
        "Static priority (lower value first)"
    }
}
