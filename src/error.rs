//! Error types for simulation runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for simulation entry points.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Reasons a simulation refuses to run.
///
/// Every variant is raised before the first step is produced; a run that
/// starts always completes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SimulationError {
    /// The individual validation failures.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
