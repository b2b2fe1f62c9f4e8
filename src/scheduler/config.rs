//! Simulation configuration.
//!
//! Selects the scheduling discipline and the step granularity of the
//! emitted trace. Serializable so a presentation layer can persist the
//! user's choice alongside the process list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatching::{rules, RuleEngine};

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive).
    #[default]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Static priority, lower value first (non-preemptive).
    Priority,
    /// Round-Robin with a fixed time quantum (preemptive).
    RoundRobin {
        /// Maximum ticks per dispatch. Must be positive.
        quantum: i64,
    },
}

impl Algorithm {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "RoundRobin",
        }
    }

    /// Round-Robin quantum, if this is Round-Robin.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Whether a running process can be put back on the ready queue.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Rule engine ordering this discipline's ready queue.
    pub fn rule_engine(&self) -> RuleEngine {
        match self {
            Self::Fcfs | Self::RoundRobin { .. } => RuleEngine::new().with_rule(rules::Fifo),
            Self::Sjf => RuleEngine::new().with_rule(rules::Spt),
            Self::Priority => RuleEngine::new().with_rule(rules::PriorityRule),
        }
    }

    /// Ticks granted to a dispatch of a process with `remaining` ticks left.
    pub fn slice_for(&self, remaining: i64) -> i64 {
        match self {
            Self::RoundRobin { quantum } => (*quantum).min(remaining),
            _ => remaining,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RoundRobin(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// How many steps a dispatch produces.
///
/// Granularity is a presentation resolution: it never changes start, end,
/// waiting or turnaround times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepGranularity {
    /// SJF steps per time unit, every other discipline per dispatch.
    #[default]
    Reference,
    /// One step per dispatch (or per quantum slice).
    PerDispatch,
    /// One step per tick of each slice, plus the slice-end step.
    PerTimeUnit,
}

impl StepGranularity {
    /// Whether `algorithm` emits per-tick steps under this granularity.
    pub fn is_fine_for(&self, algorithm: &Algorithm) -> bool {
        match self {
            Self::Reference => matches!(algorithm, Algorithm::Sjf),
            Self::PerDispatch => false,
            Self::PerTimeUnit => true,
        }
    }
}

/// Full configuration of one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scheduling discipline.
    pub algorithm: Algorithm,
    /// Step granularity of the emitted trace.
    #[serde(default)]
    pub granularity: StepGranularity,
}

impl SimulationConfig {
    /// Creates a configuration for `algorithm` with reference granularity.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            granularity: StepGranularity::Reference,
        }
    }

    /// Round-Robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::new(Algorithm::RoundRobin { quantum })
    }

    /// Sets the step granularity.
    pub fn with_granularity(mut self, granularity: StepGranularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Whether this run emits per-tick steps.
    pub fn fine_stepping(&self) -> bool {
        self.granularity.is_fine_for(&self.algorithm)
    }
}
