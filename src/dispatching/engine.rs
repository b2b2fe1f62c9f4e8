//! Rule engine for ready-queue ordering.
//!
//! Composes dispatching rules sequentially: the first rule decides, later
//! rules only break its ties. Sorting is stable, so processes that tie on
//! every rule keep their queue order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep current queue order (stable).
    #[default]
    QueueOrder,
    /// Deterministic by process ID (lexicographic).
    ById,
}

/// A composable rule engine for ready-queue ordering.
///
/// # Example
/// ```
/// use u_cpu_sched::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityRule)
///     .with_rule(rules::Spt);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "SPT"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure queue order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::QueueOrder,
            epsilon: 1e-9,
        }
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by priority (dispatched first → first).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the process that would be dispatched next.
    ///
    /// Among equally-scored processes, the earliest in the slice wins.
    pub fn select_best(&self, processes: &[Process], context: &SchedulingContext) -> Option<usize> {
        self.sort_indices(processes, context).first().copied()
    }

    /// Reorders a ready queue in place so its head is the next dispatch.
    pub fn order_queue(&self, queue: &mut VecDeque<Process>, context: &SchedulingContext) {
        if self.rules.is_empty() && self.tie_breaker == TieBreaker::QueueOrder {
            return;
        }
        queue
            .make_contiguous()
            .sort_by(|a, b| self.compare(a, b, context));
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            if let (Some(key_a), Some(key_b)) =
                (rule.exact_key(a, context), rule.exact_key(b, context))
            {
                match key_a.cmp(&key_b) {
                    Ordering::Equal => continue,
                    ordering => return ordering,
                }
            }

            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match self.tie_breaker {
            TieBreaker::QueueOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn make_process(id: &str, burst: i64, priority: i32) -> Process {
        Process::new(id).with_burst(burst).with_priority(priority)
    }

    #[test]
    fn test_spt_ordering() {
        let ready = vec![
            make_process("long", 5, 0),
            make_process("short", 1, 0),
            make_process("medium", 3, 0),
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        let indices = engine.sort_indices(&ready, &ctx);
        assert_eq!(ready[indices[0]].id, "short");
        assert_eq!(ready[indices[1]].id, "medium");
        assert_eq!(ready[indices[2]].id, "long");
    }

    #[test]
    fn test_large_bursts_compare_exactly() {
        let base = 1_i64 << 53;
        let ready = vec![make_process("bigger", base + 1, 0), make_process("smaller", base, 0)];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        assert_eq!(engine.select_best(&ready, &ctx), Some(1));
    }

    #[derive(Debug)]
    struct LongestWait;

    impl DispatchingRule for LongestWait {
        fn name(&self) -> &'static str {
            "LWT"
        }

        fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore {
            -((context.current_time - process.arrival_time) as f64)
        }
    }

    #[test]
    fn test_custom_rule_reads_context() {
        let ready = vec![
            make_process("recent", 1, 0).with_arrival(8),
            make_process("old", 1, 0).with_arrival(2),
        ];
        let engine = RuleEngine::new().with_rule(LongestWait);

        assert_eq!(engine.select_best(&ready, &SchedulingContext::at_time(10)), Some(1));
    }

    #[test]
    fn test_ties_keep_queue_order() {
        let ready = vec![
            make_process("first", 4, 1),
            make_process("second", 4, 1),
            make_process("third", 4, 1),
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        assert_eq!(engine.sort_indices(&ready, &ctx), vec![0, 1, 2]);
        assert_eq!(engine.select_best(&ready, &ctx), Some(0));
    }

    #[test]
    fn test_secondary_rule_breaks_ties() {
        let ready = vec![make_process("A", 6, 1), make_process("B", 2, 1)];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::PriorityRule)
            .with_rule(rules::Spt);

        assert_eq!(engine.select_best(&ready, &ctx), Some(1));
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let ready = vec![make_process("B", 1, 0), make_process("A", 1, 0)];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_final_tie_breaker(TieBreaker::ById);

        assert_eq!(engine.select_best(&ready, &ctx), Some(1));
    }

    #[test]
    fn test_order_queue_in_place() {
        let mut queue: VecDeque<Process> = vec![
            make_process("a", 3, 2),
            make_process("b", 3, 0),
            make_process("c", 3, 2),
        ]
        .into();
        let ctx = SchedulingContext::at_time(0);
        RuleEngine::new()
            .with_rule(rules::PriorityRule)
            .order_queue(&mut queue, &ctx);

        let ids: Vec<&str> = queue.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_engine_is_fifo() {
        let mut queue: VecDeque<Process> =
            vec![make_process("x", 9, 9), make_process("y", 1, 0)].into();
        RuleEngine::new().order_queue(&mut queue, &SchedulingContext::at_time(0));
        assert_eq!(queue[0].id, "x");
    }

    #[test]
    fn test_empty_processes() {
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let p = make_process("T1", 3, 2);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_rule(rules::PriorityRule);

        let scores = engine.evaluate(&p, &ctx);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 3.0).abs() < 1e-10);
        assert!((scores[1] - 2.0).abs() < 1e-10);
    }
}
