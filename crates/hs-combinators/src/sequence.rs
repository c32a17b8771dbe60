//! `Sequence` — piecewise concatenation of child schedules.
//!
//! # Window model
//!
//! Stage `i` is active for `step_sizes[i]` consecutive global steps.  The
//! running totals of `step_sizes` (the *boundaries*) partition the positive
//! integers into contiguous windows:
//!
//! ```text
//! step_sizes  = [3, 2, 4]
//! boundaries  = [3, 5, 9]
//!
//! t           1 2 3 | 4 5 | 6 7 8 9 | 10 11 ...
//! stage       0 0 0 | 1 1 | 2 2 2 2 |  2  2 ...
//! local t     1 2 3 | 1 2 | 1 2 3 4 |  5  6 ...
//! ```
//!
//! A boundary step belongs to the window it *closes* (`t > boundary` is
//! strict).  The last window is unbounded: steps past the final boundary keep
//! being served by the last stage, re-based from its own window start, so a
//! `Sequence` never runs out.

use hs_core::{
    BoxedSchedule, ElementType, IntoStage, Iterate, Schedule, ScheduleError, ScheduleResult,
    SizeKind, Step,
};
use tracing::debug;

// ── Sequence ──────────────────────────────────────────────────────────────────

/// Child schedules, each active for a configured number of steps.
pub struct Sequence<T> {
    stages:     Vec<BoxedSchedule<T>>,
    step_sizes: Vec<Step>,
    /// Cumulative sum of `step_sizes`; strictly increasing.
    boundaries: Vec<Step>,
}

impl<T: 'static> Sequence<T> {
    /// Build a sequence from parallel lists of stages and step sizes.
    ///
    /// Bare numbers in `stages` are lifted into `Constant` schedules.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::LengthMismatch`] if the lists differ in length.
    /// - [`ScheduleError::EmptySequence`] if both lists are empty.
    /// - [`ScheduleError::ZeroStepSize`] if any step size is `0`.
    pub fn new<I, S>(stages: I, step_sizes: Vec<Step>) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: IntoStage<T>,
    {
        let stages = stages.into_iter().map(|s| s.into_stage()).collect();
        Self::from_boxed(stages, step_sizes)
    }

    /// Build a sequence from `(stage, step_size)` pairs.
    ///
    /// For stages of mixed types use the [`sequence!`](crate::sequence!) macro.
    pub fn from_pairs<I, S>(pairs: I) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = (S, Step)>,
        S: IntoStage<T>,
    {
        let (stages, step_sizes): (Vec<_>, Vec<_>) = pairs
            .into_iter()
            .map(|(stage, steps)| (stage.into_stage(), steps))
            .unzip();
        Self::from_boxed(stages, step_sizes)
    }

    /// Build a sequence from already-boxed stages.
    pub fn from_boxed(stages: Vec<BoxedSchedule<T>>, step_sizes: Vec<Step>) -> ScheduleResult<Self> {
        if stages.len() != step_sizes.len() {
            return Err(ScheduleError::LengthMismatch {
                stages:     stages.len(),
                step_sizes: step_sizes.len(),
            });
        }
        if stages.is_empty() {
            return Err(ScheduleError::EmptySequence);
        }
        if let Some(stage) = step_sizes.iter().position(|&n| n == 0) {
            return Err(ScheduleError::ZeroStepSize { stage });
        }

        let boundaries: Vec<Step> = step_sizes
            .iter()
            .scan(0, |acc: &mut Step, &n| {
                *acc = acc.saturating_add(n);
                Some(*acc)
            })
            .collect();

        debug!(stages = stages.len(), ?boundaries, "built sequence");

        Ok(Self { stages, step_sizes, boundaries })
    }
}

impl<T> Sequence<T> {
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Configured step size of each stage.
    pub fn step_sizes(&self) -> &[Step] {
        &self.step_sizes
    }

    /// Cumulative window ends: `boundaries()[i]` is the last global step of
    /// stage `i`'s nominal window.
    pub fn boundaries(&self) -> &[Step] {
        &self.boundaries
    }

    /// The stage active at global step `t` and the local step it sees.
    ///
    /// The active stage is the one after the last boundary strictly below
    /// `t`, pinned to the final stage once every boundary has been passed.
    pub fn stage_at(&self, t: Step) -> (usize, Step) {
        debug_assert!(t >= 1, "sequence evaluated at step {t}, outside the 1-based domain");

        // Boundaries are strictly increasing, so those below `t` form a prefix.
        let passed = self.boundaries.partition_point(|&b| b < t);
        let active = passed.min(self.stages.len() - 1);

        let local = if active == 0 {
            t
        } else {
            t - self.boundaries[active - 1]
        };
        (active, local)
    }
}

impl<T: 'static> Schedule for Sequence<T> {
    type Output = T;

    fn at(&self, t: Step) -> T {
        let (stage, local) = self.stage_at(t);
        self.stages[stage].at(local)
    }

    fn size_kind(&self) -> SizeKind {
        SizeKind::Unknown
    }

    /// Stages are chosen at run time, so no single element type is reported
    /// even though every stage yields `T`.
    fn element_type(&self) -> ElementType {
        ElementType::Unknown
    }
}

// ── Iteration ─────────────────────────────────────────────────────────────────

/// Traversal position within a [`Sequence`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceState {
    /// Global step of the next value.
    pub t:      Step,
    /// Index of the active stage (0-based).
    pub stage:  usize,
    /// Global step at which the active stage's window began.
    pub origin: Step,
}

impl SequenceState {
    pub const START: SequenceState = SequenceState { t: 1, stage: 0, origin: 1 };
}

impl<T: 'static> Iterate for Sequence<T> {
    type State = SequenceState;

    fn initial_state(&self) -> SequenceState {
        SequenceState::START
    }

    fn step(&self, state: Option<SequenceState>) -> (T, SequenceState) {
        let SequenceState { t, mut stage, mut origin } = state.unwrap_or(SequenceState::START);

        // Switch at most one stage per step: every window is at least one wide.
        // Compare distances: `origin <= t`, but `origin + step_size` may overflow.
        let is_last = stage + 1 == self.stages.len();
        if !is_last && t - origin >= self.step_sizes[stage] {
            stage += 1;
            origin = t;
        }

        let value = self.stages[stage].at(t - origin + 1);
        (value, SequenceState { t: t + 1, stage, origin })
    }
}

// ── Macro ─────────────────────────────────────────────────────────────────────

/// Build a [`Sequence`] from `stage => step_size` pairs of mixed types.
///
/// Bare numbers are lifted to constants.  Evaluates to
/// `ScheduleResult<Sequence<T>>`.
///
/// ```rust,ignore
/// let lr: Sequence<f64> = sequence![
///     from_fn(|t| t as f64 / 100.0) => 100,
///     1.0                           => 900,
///     0.1                           => 1,
/// ]?;
/// ```
#[macro_export]
macro_rules! sequence {
    ($($stage:expr => $steps:expr),+ $(,)?) => {
        $crate::Sequence::from_boxed(
            vec![$($crate::IntoStage::into_stage($stage)),+],
            vec![$($steps),+],
        )
    };
}
