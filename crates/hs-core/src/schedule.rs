//! The schedule protocol.
//!
//! Three traits, layered:
//!
//! - [`Schedule`] — evaluate at an integer step, report metadata.
//! - [`ContinuousSchedule`] — additionally evaluate at a real-valued step.
//! - [`Iterate`] — produce `(value, next_state)` pairs from an explicit,
//!   caller-held state.
//!
//! # Iteration model
//!
//! Iteration state never lives inside the schedule.  `step(None)` starts from
//! the schedule's natural initial state; passing the returned state back in
//! yields the next value.  Any number of traversals of one shared schedule
//! can therefore run side by side without interfering.
//!
//! ```text
//! let (v1, s) = sched.step(None);     // value at t = 1
//! let (v2, s) = sched.step(Some(s));  // value at t = 2
//! let (v1, _) = sched.step(None);     // restart: value at t = 1 again
//! ```

use std::sync::Arc;

use crate::{ElementType, ScheduleError, ScheduleResult, SizeKind, Step};

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A pure mapping from a 1-based step index to a value.
///
/// # Contract
///
/// - `at(t)` must be deterministic and free of side effects.
/// - `at(t)` is only defined for `t >= 1`.
/// - Implementations must be `Send + Sync` so one schedule tree can be shared
///   by several cursors or threads.
pub trait Schedule: Send + Sync {
    /// The value type produced at every step.
    type Output;

    /// Evaluate the schedule at step `t`.
    fn at(&self, t: Step) -> Self::Output;

    /// How far the schedule extends.  Defaults to [`SizeKind::Unknown`].
    fn size_kind(&self) -> SizeKind {
        SizeKind::Unknown
    }

    /// The value type this schedule produces.
    fn element_type(&self) -> ElementType {
        ElementType::of::<Self::Output>()
    }

    /// Like [`at`][Schedule::at], but rejects `t == 0` instead of leaving it
    /// undefined.
    fn checked_at(&self, t: Step) -> ScheduleResult<Self::Output> {
        if t == 0 {
            return Err(ScheduleError::OutOfDomain { step: t });
        }
        Ok(self.at(t))
    }
}

/// A schedule that is also defined between integer steps.
///
/// `at_real(t as f64)` must agree with `at(t)` for every integer `t >= 1`.
pub trait ContinuousSchedule: Schedule {
    fn at_real(&self, t: f64) -> Self::Output;
}

// ── Iterate ───────────────────────────────────────────────────────────────────

/// Lazy traversal of `at(1), at(2), at(3), ...` with externally held state.
pub trait Iterate: Schedule {
    /// Opaque position within the traversal.
    type State: Clone;

    /// The state that produces `at(1)` on the next `step`.
    fn initial_state(&self) -> Self::State;

    /// Produce the value at `state` and the state for the following step.
    ///
    /// `None` restarts from [`initial_state`][Iterate::initial_state].
    fn step(&self, state: Option<Self::State>) -> (Self::Output, Self::State);

    /// A std [`Iterator`] over this schedule.  Never returns `None`.
    fn iter(&self) -> ScheduleIter<'_, Self>
    where
        Self: Sized,
    {
        ScheduleIter::new(self)
    }
}

/// Iterator adapter returned by [`Iterate::iter`].
///
/// Borrows the schedule immutably; the traversal state lives here.
pub struct ScheduleIter<'a, S: Iterate> {
    schedule: &'a S,
    state:    Option<S::State>,
}

impl<'a, S: Iterate> ScheduleIter<'a, S> {
    pub fn new(schedule: &'a S) -> Self {
        Self { schedule, state: None }
    }

    /// Current traversal state, or `None` before the first value.
    pub fn state(&self) -> Option<&S::State> {
        self.state.as_ref()
    }
}

impl<S: Iterate> Iterator for ScheduleIter<'_, S> {
    type Item = S::Output;

    fn next(&mut self) -> Option<S::Output> {
        let (value, next) = self.schedule.step(self.state.take());
        self.state = Some(next);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// ── Blanket impls for shared handles ─────────────────────────────────────────

macro_rules! forward_schedule {
    ($($handle:ty),* $(,)?) => {$(
        impl<S: Schedule + ?Sized> Schedule for $handle {
            type Output = S::Output;

            #[inline]
            fn at(&self, t: Step) -> S::Output {
                (**self).at(t)
            }

            fn size_kind(&self) -> SizeKind {
                (**self).size_kind()
            }

            fn element_type(&self) -> ElementType {
                (**self).element_type()
            }
        }

        impl<S: ContinuousSchedule + ?Sized> ContinuousSchedule for $handle {
            #[inline]
            fn at_real(&self, t: f64) -> S::Output {
                (**self).at_real(t)
            }
        }
    )*};
}

forward_schedule!(&S, Box<S>, Arc<S>);
