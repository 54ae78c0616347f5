use crate::types::workout::WorkoutKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    #[error("invalid workout type: {0}")]
    InvalidWorkoutType(String),
    #[error("{kind} expects {expected} values, got {got}")]
    WrongArity {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },
    #[error("action count must be a non-negative whole number, got {0}")]
    InvalidActionCount(f64),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("Invalid package: {0}")]
    InvalidPackage(String),
}
