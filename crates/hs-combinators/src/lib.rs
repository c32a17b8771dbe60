//! `hs-combinators` — build complex schedules out of simpler ones.
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`sequence`]     | `Sequence`, `SequenceState`, `sequence!`              |
//! | [`periodic`]     | `Loop`                                                |
//! | [`interpolator`] | `Interpolator`                                        |
//! | [`transform`]    | `reverse`, `symmetric`                                |
//!
//! # Index algebra (summary)
//!
//! All integer-indexed combinators use 1-based steps:
//!
//! ```text
//! Sequence([s1, s2], [n1, n2])(t) = s1(t)            for t ≤ n1
//!                                 = s2(t - n1)       for t > n1 (forever)
//! Loop(f, p)(t)                   = f(((t - 1) mod p) + 1)
//! Interpolator(s, r)(t)           = s(t / r)
//! reverse(f, p)(t)                = f(p - t)
//! symmetric(f, p)(t)              = f(t) if t < p/2 else f(p - t)
//! ```
//!
//! Every combinator is itself a [`Schedule`][hs_core::Schedule], so trees of
//! arbitrary depth compose without ceremony.

pub mod interpolator;
pub mod periodic;
pub mod sequence;
pub mod transform;

#[cfg(test)]
mod tests;

// Re-exported so `sequence!` resolves without a direct hs-core dependency.
pub use hs_core::{BoxedSchedule, IntoStage};
pub use interpolator::Interpolator;
pub use periodic::Loop;
pub use sequence::{Sequence, SequenceState};
pub use transform::{reverse, symmetric};
