//! `Stateful` — a mutable cursor over an immutable schedule.
//!
//! Not synchronised: `next_value` reads the counter, consults the policy, and
//! maybe writes the counter as three separate steps.  If several threads must
//! drive one cursor, wrap it in a `Mutex`.

use hs_core::{Schedule, Step};
use tracing::trace;

use crate::{AdvancePolicy, AlwaysAdvance};

/// Turns a schedule into an advance-on-demand value source.
///
/// # Example
///
/// ```rust,ignore
/// let mut lr = Stateful::new(warmup_then_decay);
/// for batch in loader {
///     optimizer.set_lr(lr.next_value());
///     ...
/// }
/// lr.reset(); // start the next run from step 1
/// ```
#[derive(Clone, Debug)]
pub struct Stateful<S, P = AlwaysAdvance> {
    schedule: S,
    /// Step evaluated by the next `next_value` call.  Starts at 1.
    state:    Step,
    advance:  P,
}

impl<S: Schedule> Stateful<S> {
    /// A cursor that advances on every call.
    pub fn new(schedule: S) -> Self {
        Self::with_advance(schedule, AlwaysAdvance)
    }
}

impl<S: Schedule, P: AdvancePolicy> Stateful<S, P> {
    /// A cursor whose counter only moves when `advance(state)` returns `true`.
    pub fn with_advance(schedule: S, advance: P) -> Self {
        Self { schedule, state: 1, advance }
    }

    /// Evaluate at the current step, then advance if the policy allows.
    ///
    /// The policy sees the same pre-increment step that was evaluated.
    pub fn next_value(&mut self) -> S::Output {
        let value = self.schedule.at(self.state);
        if self.advance.should_advance(self.state) {
            self.state += 1;
            trace!(state = self.state, "cursor advanced");
        }
        value
    }

    /// Return the counter to step 1.
    pub fn reset(&mut self) -> &mut Self {
        self.state = 1;
        trace!("cursor reset");
        self
    }

    /// The step the next `next_value` call will evaluate.
    pub fn state(&self) -> Step {
        self.state
    }

    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    pub fn into_inner(self) -> S {
        self.schedule
    }
}

/// Infinite: `next` always returns `Some(self.next_value())`.
impl<S: Schedule, P: AdvancePolicy> Iterator for Stateful<S, P> {
    type Item = S::Output;

    fn next(&mut self) -> Option<S::Output> {
        Some(self.next_value())
    }
}
