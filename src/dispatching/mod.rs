//! Dispatching rules and rule engine for ready-queue ordering.
//!
//! Each scheduling discipline differs only in how it orders the ready queue.
//! A rule scores a process; the [`RuleEngine`] stably sorts the queue by
//! those scores so that the head is the next process to dispatch.
//!
//! # Usage
//!
//! ```
//! use u_cpu_sched::dispatching::{RuleEngine, SchedulingContext};
//! use u_cpu_sched::dispatching::rules;
//! use u_cpu_sched::models::Process;
//!
//! let engine = RuleEngine::new().with_rule(rules::Spt);
//! let ready = vec![
//!     Process::new("long").with_burst(8),
//!     Process::new("short").with_burst(2),
//! ];
//! let best = engine.select_best(&ready, &SchedulingContext::at_time(0));
//! assert_eq!(best, Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = f64;

/// A dispatching rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = higher priority.** Processes with equal scores keep
/// their current queue order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO", "SPT").
    fn name(&self) -> &'static str;

    /// Scores a process given the current scheduling context.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Exact integer form of the score, for rules whose score is an integer.
    ///
    /// When both sides of a comparison return `Some`, the engine compares
    /// these keys instead of the `f64` scores, which cannot represent every
    /// `i64` above 2^53.
    fn exact_key(&self, _process: &Process, _context: &SchedulingContext) -> Option<i64> {
        None
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
