use thiserror::Error;

use crate::core::state::TaskId;

/// Input problems detected before a simulation starts. Fatal to the
/// requested run, never to the process; the caller may correct the
/// input and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task set is empty")]
    EmptyTaskSet,
    #[error("duplicate task id {0}")]
    DuplicateId(TaskId),
    #[error("task {0} has zero burst; burst must be positive")]
    NonPositiveBurst(TaskId),
    #[error("round robin requires a time quantum")]
    MissingQuantum,
    #[error("time quantum must be positive")]
    NonPositiveQuantum,
}

/// Top-level simulation error. `Invariant` signals a programming
/// defect caught mid-run (e.g. remaining-work underflow); it is never
/// produced by valid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

impl SimError {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        SimError::Invariant(msg.into())
    }
}
