//! CPU scheduling domain models.
//!
//! Provides the data types that flow into and out of a simulation run.
//!
//! # Domain Mappings
//!
//! | u-cpu-sched | Textbook term | Presentation |
//! |-------------|---------------|--------------|
//! | Process | Process / job | Table row, queue chip |
//! | ExecutionStep | Scheduling event | Animation frame |
//! | Trace | Schedule history | Playback timeline |
//! | TimelineSegment | CPU burst interval | Gantt bar |

mod process;
mod step;
mod trace;

pub use process::Process;
pub use step::ExecutionStep;
pub use trace::{TimelineSegment, Trace, TraceCursor};
