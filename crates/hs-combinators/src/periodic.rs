//! `Loop` — repeat a schedule forever over a fixed window.

use hs_core::{ElementType, Iterate, Schedule, ScheduleError, ScheduleResult, SizeKind, Step};
use tracing::debug;

/// Re-indexes steps through a periodic window of `period` steps.
///
/// ```text
/// Loop(f, 3):  t   1 2 3 4 5 6 7 ...
///              f(·) 1 2 3 1 2 3 1 ...
/// ```
///
/// Wrapping any schedule in a `Loop` makes the composite infinite by
/// repetition.
#[derive(Clone, Debug)]
pub struct Loop<F> {
    inner:  F,
    period: Step,
}

impl<F: Schedule> Loop<F> {
    /// # Errors
    ///
    /// [`ScheduleError::ZeroPeriod`] if `period == 0`.
    pub fn new(inner: F, period: Step) -> ScheduleResult<Self> {
        if period == 0 {
            return Err(ScheduleError::ZeroPeriod);
        }
        debug!(period, "built loop");
        Ok(Self { inner, period })
    }

    pub fn period(&self) -> Step {
        self.period
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// 1-based modulo: maps any `t >= 1` into `[1, period]`.
    #[inline]
    pub fn wrap(&self, t: Step) -> Step {
        debug_assert!(t >= 1, "loop evaluated at step {t}, outside the 1-based domain");
        (t - 1) % self.period + 1
    }
}

impl<F: Schedule> Schedule for Loop<F> {
    type Output = F::Output;

    #[inline]
    fn at(&self, t: Step) -> F::Output {
        self.inner.at(self.wrap(t))
    }

    fn size_kind(&self) -> SizeKind {
        SizeKind::Infinite
    }

    fn element_type(&self) -> ElementType {
        self.inner.element_type()
    }
}

impl<F: Schedule> Iterate for Loop<F> {
    type State = Step;

    fn initial_state(&self) -> Step {
        1
    }

    fn step(&self, state: Option<Step>) -> (F::Output, Step) {
        let t = state.unwrap_or(1);
        (self.at(t), t + 1)
    }
}
