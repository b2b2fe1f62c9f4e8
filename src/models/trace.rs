//! Trace (simulation output) model.
//!
//! A trace is the ordered, append-only list of [`ExecutionStep`]s produced by
//! one run. Consumers replay it read-only; [`TraceCursor`] moves a position
//! over a borrowed trace without touching its entries.

use serde::{Deserialize, Serialize};

use super::{ExecutionStep, Process};

/// The full result of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Steps in emission order.
    pub steps: Vec<ExecutionStep>,
}

/// A contiguous stretch of CPU time owned by one process (a Gantt bar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    /// Process ID.
    pub process_id: String,
    /// Process name.
    pub name: String,
    /// Presentation color of the process.
    pub color: String,
    /// Segment start tick.
    pub start: i64,
    /// Segment end tick (exclusive).
    pub end: i64,
}

impl TimelineSegment {
    /// Segment length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub(crate) fn push(&mut self, step: ExecutionStep) {
        self.steps.push(step);
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`.
    pub fn get(&self, index: usize) -> Option<&ExecutionStep> {
        self.steps.get(index)
    }

    /// The last step, whose completed list is the final state of the run.
    pub fn final_step(&self) -> Option<&ExecutionStep> {
        self.steps.last()
    }

    /// Total elapsed simulated time (clock of the last step, 0 when empty).
    pub fn total_time(&self) -> i64 {
        self.final_step().map(|s| s.time).unwrap_or(0)
    }

    /// Completed processes in completion order.
    pub fn completed(&self) -> &[Process] {
        self.final_step()
            .map(|s| s.completed_processes.as_slice())
            .unwrap_or(&[])
    }

    /// Process IDs in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.completed().iter().map(|p| p.id.as_str()).collect()
    }

    /// Returns a read-only playback cursor positioned at the first step.
    pub fn cursor(&self) -> TraceCursor<'_> {
        TraceCursor::new(self)
    }

    /// Reconstructs the CPU timeline as Gantt segments.
    ///
    /// Steps of the same slice (fine-grained stepping) collapse into one
    /// segment, and back-to-back slices of the same process merge. Idle
    /// periods leave gaps.
    pub fn timeline(&self) -> Vec<TimelineSegment> {
        let mut segments: Vec<TimelineSegment> = Vec::new();

        for step in &self.steps {
            let (Some(running), Some(start)) = (&step.running_process, step.slice_start) else {
                continue;
            };

            if let Some(last) = segments.last_mut() {
                if last.process_id == running.id && start <= last.end {
                    last.end = last.end.max(step.time);
                    continue;
                }
            }

            segments.push(TimelineSegment {
                process_id: running.id.clone(),
                name: running.name.clone(),
                color: running.color.clone(),
                start,
                end: step.time,
            });
        }

        segments
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a ExecutionStep;
    type IntoIter = std::slice::Iter<'a, ExecutionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Read-only playback position over a trace.
///
/// Holds a shared borrow, so the trace cannot change while a cursor exists.
#[derive(Debug, Clone, Copy)]
pub struct TraceCursor<'a> {
    trace: &'a Trace,
    position: usize,
}

impl<'a> TraceCursor<'a> {
    /// Creates a cursor at the first step.
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace, position: 0 }
    }

    /// Current position (step index).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Step under the cursor, `None` for an empty trace.
    pub fn current(&self) -> Option<&'a ExecutionStep> {
        self.trace.get(self.position)
    }

    /// Moves one step forward; stays put at the last step.
    pub fn step_forward(&mut self) -> Option<&'a ExecutionStep> {
        if self.position + 1 < self.trace.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Moves one step back; stays put at the first step.
    pub fn step_back(&mut self) -> Option<&'a ExecutionStep> {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) -> Option<&'a ExecutionStep> {
        self.position = index.min(self.trace.len().saturating_sub(1));
        self.current()
    }

    /// Returns to the first step.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Whether the cursor sits on the last step (or the trace is empty).
    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }
}
