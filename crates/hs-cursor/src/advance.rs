//! `AdvancePolicy` — decides whether a cursor's counter moves.
//!
//! The cursor consults its policy once per [`next_value`] call, passing the
//! counter value that was just evaluated (before any increment).  Returning
//! `false` holds the counter so the next call yields the same step again.
//!
//! # Examples of application-defined policies
//!
//! - **Per-epoch**: advance only when the data loader reports an epoch end.
//! - **Every k-th call**: advance on gradient-accumulation boundaries.
//! - **Frozen**: never advance while a warm restart is pending.
//!
//! Any `FnMut(Step) -> bool` closure is a policy.
//!
//! [`next_value`]: crate::Stateful::next_value

use hs_core::Step;

// ── Trait ─────────────────────────────────────────────────────────────────────

pub trait AdvancePolicy {
    /// `true` to increment the counter after evaluating at `state`.
    fn should_advance(&mut self, state: Step) -> bool;
}

// ── Default ───────────────────────────────────────────────────────────────────

/// Advance on every call.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlwaysAdvance;

impl AdvancePolicy for AlwaysAdvance {
    #[inline]
    fn should_advance(&mut self, _state: Step) -> bool {
        true
    }
}

// ── Closures ──────────────────────────────────────────────────────────────────

impl<F> AdvancePolicy for F
where
    F: FnMut(Step) -> bool,
{
    #[inline]
    fn should_advance(&mut self, state: Step) -> bool {
        self(state)
    }
}
