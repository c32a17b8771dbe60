//! Framework error type.
//!
//! Every fallible operation in the `hs-*` crates is a constructor: schedules
//! validate their configuration eagerly and evaluation itself never fails.
//! The one exception is [`Schedule::checked_at`][crate::Schedule::checked_at],
//! which rejects step indices outside the 1-based domain.

use thiserror::Error;

use crate::Step;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("sequence must contain at least one stage")]
    EmptySequence,

    #[error("sequence has {stages} stages but {step_sizes} step sizes")]
    LengthMismatch {
        stages:     usize,
        step_sizes: usize,
    },

    #[error("step size of stage {stage} must be >= 1")]
    ZeroStepSize { stage: usize },

    #[error("loop period must be >= 1")]
    ZeroPeriod,

    #[error("interpolation rate must be finite and non-zero, got {0}")]
    InvalidRate(f64),

    #[error("step {step} is outside the 1-based schedule domain")]
    OutOfDomain { step: Step },
}

/// Shorthand result type for all `hs-*` crates.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
