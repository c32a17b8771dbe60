//! Closure adapters.
//!
//! Concrete schedule shapes (linear warmup, cosine, exponential decay, ...)
//! are not part of this framework.  Applications plug them in as closures:
//!
//! ```rust,ignore
//! let warmup = from_fn(|t| t as f64 / 100.0);
//! let cosine = from_real_fn(|t| 0.5 * (1.0 + (std::f64::consts::PI * t / 50.0).cos()));
//! ```

use crate::{ContinuousSchedule, Iterate, Schedule, Step};

// ── FromFn ────────────────────────────────────────────────────────────────────

/// A schedule backed by a closure over integer steps.
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wrap `f` so that `from_fn(f).at(t) == f(t)`.
pub fn from_fn<F, T>(f: F) -> FromFn<F>
where
    F: Fn(Step) -> T + Send + Sync,
{
    FromFn(f)
}

impl<F, T> Schedule for FromFn<F>
where
    F: Fn(Step) -> T + Send + Sync,
{
    type Output = T;

    #[inline]
    fn at(&self, t: Step) -> T {
        (self.0)(t)
    }
}

impl<F, T> Iterate for FromFn<F>
where
    F: Fn(Step) -> T + Send + Sync,
{
    type State = Step;

    fn initial_state(&self) -> Step {
        1
    }

    fn step(&self, state: Option<Step>) -> (T, Step) {
        let t = state.unwrap_or(1);
        ((self.0)(t), t + 1)
    }
}

// ── RealFn ────────────────────────────────────────────────────────────────────

/// A schedule backed by a closure over real-valued steps.
///
/// Integer evaluation converts the step to `f64`.  This is the adapter to use
/// underneath an `Interpolator`, whose rescaled input is generally fractional.
#[derive(Clone, Copy)]
pub struct RealFn<F>(F);

/// Wrap `f` so that `from_real_fn(f).at_real(t) == f(t)`.
pub fn from_real_fn<F, T>(f: F) -> RealFn<F>
where
    F: Fn(f64) -> T + Send + Sync,
{
    RealFn(f)
}

impl<F, T> Schedule for RealFn<F>
where
    F: Fn(f64) -> T + Send + Sync,
{
    type Output = T;

    #[inline]
    fn at(&self, t: Step) -> T {
        (self.0)(t as f64)
    }
}

impl<F, T> ContinuousSchedule for RealFn<F>
where
    F: Fn(f64) -> T + Send + Sync,
{
    #[inline]
    fn at_real(&self, t: f64) -> T {
        (self.0)(t)
    }
}

impl<F, T> Iterate for RealFn<F>
where
    F: Fn(f64) -> T + Send + Sync,
{
    type State = Step;

    fn initial_state(&self) -> Step {
        1
    }

    fn step(&self, state: Option<Step>) -> (T, Step) {
        let t = state.unwrap_or(1);
        ((self.0)(t as f64), t + 1)
    }
}
