//! Input validation for simulation runs.
//!
//! Checks the process list and algorithm parameters before any step is
//! produced. Detects:
//! - Duplicate or empty process IDs
//! - Non-positive burst times
//! - Negative arrival times and priorities
//! - Non-positive Round-Robin quantum
//! - Workloads whose completion time would not fit in an `i64` clock
//!
//! Rejecting these up front guarantees termination: every dispatch then
//! strictly reduces some process's remaining time.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
    /// Priority is negative.
    NegativePriority,
    /// Round-Robin quantum is zero or negative.
    InvalidQuantum,
    /// Latest arrival plus total burst overflows the clock.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a simulation run.
///
/// Checks:
/// 1. Quantum > 0 (Round-Robin only)
/// 2. No empty process IDs
/// 3. No duplicate process IDs
/// 4. Burst time > 0
/// 5. Arrival time >= 0
/// 6. Priority >= 0
/// 7. Latest arrival + sum of bursts fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = Vec::new();

    if let Algorithm::RoundRobin { quantum } = *algorithm {
        if quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round-Robin quantum must be positive, got {quantum}"),
            ));
        }
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process '{}' has an empty ID", p.name),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Process '{}' has negative priority {}", p.id, p.priority),
            ));
        }
    }

    if clock_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any clock value a run can reach, `None` on overflow.
///
/// The clock only advances by executed slices or by jumping to an arrival,
/// so it never passes the latest arrival plus the total burst.
fn clock_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("p1").with_arrival(0).with_burst(5).with_priority(2),
            Process::new("p2").with_arrival(1).with_burst(3).with_priority(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), &Algorithm::Fcfs).is_ok());
        assert!(validate_input(&sample_processes(), &Algorithm::RoundRobin { quantum: 2 }).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&[], &Algorithm::Sjf).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("p1"), Process::new("p1")];
        let errors = validate_input(&processes, &Algorithm::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_id() {
        let processes = vec![Process::new("").with_name("nameless")];
        let errors = validate_input(&processes, &Algorithm::Fcfs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);
        assert!(errors[0].message.contains("nameless"));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new("p1").with_burst(0)];
        let errors = validate_input(&processes, &Algorithm::Priority).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_negative_arrival_and_priority() {
        let processes = vec![Process::new("p1").with_arrival(-1).with_priority(-3)];
        let errors = validate_input(&processes, &Algorithm::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativePriority));
    }

    #[test]
    fn test_invalid_quantum() {
        for quantum in [0, -2] {
            let errors =
                validate_input(&sample_processes(), &Algorithm::RoundRobin { quantum }).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
        }
    }

    #[test]
    fn test_invalid_quantum_with_empty_input() {
        let errors = validate_input(&[], &Algorithm::RoundRobin { quantum: 0 }).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_clock_overflow() {
        let processes = vec![Process::new("p1").with_arrival(i64::MAX - 1).with_burst(5)];
        let errors = validate_input(&processes, &Algorithm::Fcfs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_burst_sum_overflow() {
        let processes = vec![
            Process::new("p1").with_burst(i64::MAX / 2 + 1),
            Process::new("p2").with_burst(i64::MAX / 2 + 1),
        ];
        let errors = validate_input(&processes, &Algorithm::Sjf).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        let processes = vec![Process::new("p1").with_arrival(i64::MAX - 5).with_burst(5)];
        assert!(validate_input(&processes, &Algorithm::Fcfs).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new("p1").with_burst(0),
            Process::new("p1").with_arrival(-5),
        ];
        let errors =
            validate_input(&processes, &Algorithm::RoundRobin { quantum: 0 }).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
