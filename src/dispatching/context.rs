//! Scheduling context for dispatching rule evaluation.

/// Runtime state passed to dispatching rules.
///
/// The built-in rules score from process fields alone; these fields exist
/// for custom rules (aging, quantum-aware scoring) plugged in through
/// [`Simulator::with_rule_engine`](crate::scheduler::Simulator::with_rule_engine).
///
/// All times are ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation clock.
    pub current_time: i64,
    /// Round-Robin quantum, when one applies.
    pub quantum: Option<i64>,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            quantum: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = SchedulingContext::at_time(7).with_quantum(3);
        assert_eq!(ctx.current_time, 7);
        assert_eq!(ctx.quantum, Some(3));
    }
}
