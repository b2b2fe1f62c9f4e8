//! Process model.
//!
//! A process is one schedulable unit of CPU work. It carries caller-supplied
//! input fields (arrival, burst, priority) and scheduling-derived fields that
//! the engine writes while simulating.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the simulated CPU.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
///
/// # Derived Fields
/// `start_time`, `end_time`, `waiting_time` and `turnaround_time` are `None`
/// until the engine writes them. `remaining_time` starts at `burst_time` and
/// only ever decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier (within one run).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Opaque presentation metadata, passed through unchanged.
    #[serde(default)]
    pub color: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent).
    pub priority: i32,
    /// CPU ticks still owed. Ignored on input; each run resets it from
    /// `burst_time`.
    #[serde(default)]
    pub remaining_time: i64,
    /// Tick of first dispatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Tick of completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_time: Option<i64>,
    /// `end_time - arrival_time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnaround_time: Option<i64>,
}

impl Process {
    /// Creates a process with the given ID, arriving at t=0 with a one-tick burst.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            color: String::new(),
            arrival_time: 0,
            burst_time: 1,
            priority: 0,
            remaining_time: 1,
            start_time: None,
            end_time: None,
            waiting_time: None,
            turnaround_time: None,
        }
    }

    /// Sets the process name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the presentation color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time (also resets remaining time).
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self.remaining_time = burst_time;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns a copy with all derived fields cleared.
    ///
    /// The engine works on these copies so the caller's list is never touched.
    pub fn fresh_copy(&self) -> Self {
        Self {
            remaining_time: self.burst_time,
            start_time: None,
            end_time: None,
            waiting_time: None,
            turnaround_time: None,
            ..self.clone()
        }
    }

    /// Records the first dispatch; later calls are ignored.
    pub(crate) fn mark_started(&mut self, now: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Records completion at `now` and derives turnaround and waiting time
    /// from the full burst time.
    pub(crate) fn mark_completed(&mut self, now: i64) {
        let turnaround = now - self.arrival_time;
        self.remaining_time = 0;
        self.end_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    /// Whether the engine has marked this process completed.
    pub fn is_completed(&self) -> bool {
        self.end_time.is_some()
    }

    /// Whether the process has been dispatched at least once.
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }
}
