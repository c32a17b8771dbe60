//! `Interpolator` — query a schedule defined in large units with small ones.
//!
//! A schedule written per epoch can be driven per batch by wrapping it with
//! `rate = batches_per_epoch`:
//!
//! ```text
//! Interpolator(s, 4)(t) = s(t / 4)      t = 1, 2, 3, 4, 5 ...
//!                                       s(0.25), s(0.5), s(0.75), s(1.0), s(1.25) ...
//! ```
//!
//! The rescaled input is generally fractional, so the wrapped schedule must be
//! a [`ContinuousSchedule`].  The input domain is the only thing that changes;
//! size kind and element type pass through untouched.

use hs_core::{
    ContinuousSchedule, ElementType, Iterate, Schedule, ScheduleError, ScheduleResult, SizeKind,
    Step,
};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct Interpolator<S> {
    inner: S,
    rate:  f64,
}

impl<S: ContinuousSchedule> Interpolator<S> {
    /// # Errors
    ///
    /// [`ScheduleError::InvalidRate`] if `rate` is zero, infinite, or NaN.
    pub fn new(inner: S, rate: f64) -> ScheduleResult<Self> {
        if rate == 0.0 || !rate.is_finite() {
            return Err(ScheduleError::InvalidRate(rate));
        }
        debug!(rate, "built interpolator");
        Ok(Self { inner, rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ContinuousSchedule> Schedule for Interpolator<S> {
    type Output = S::Output;

    #[inline]
    fn at(&self, t: Step) -> S::Output {
        self.at_real(t as f64)
    }

    fn size_kind(&self) -> SizeKind {
        self.inner.size_kind()
    }

    fn element_type(&self) -> ElementType {
        self.inner.element_type()
    }
}

impl<S: ContinuousSchedule> ContinuousSchedule for Interpolator<S> {
    #[inline]
    fn at_real(&self, t: f64) -> S::Output {
        self.inner.at_real(t / self.rate)
    }
}

impl<S: ContinuousSchedule> Iterate for Interpolator<S> {
    type State = Step;

    fn initial_state(&self) -> Step {
        1
    }

    fn step(&self, state: Option<Step>) -> (S::Output, Step) {
        let t = state.unwrap_or(1);
        (self.at(t), t + 1)
    }
}
