//! `hs-core` — foundational types for the `hyperschedule` framework.
//!
//! This crate is a dependency of every other `hs-*` crate.  It intentionally
//! has no `hs-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`meta`]        | `Step`, `SizeKind`, `ElementType`                     |
//! | [`schedule`]    | `Schedule`, `ContinuousSchedule`, `Iterate`, `ScheduleIter` |
//! | [`constant`]    | `Constant`                                            |
//! | [`func`]        | `FromFn`, `RealFn`, `from_fn`, `from_real_fn`         |
//! | [`stage`]       | `IntoStage`, `BoxedSchedule`                          |
//! | [`error`]       | `ScheduleError`, `ScheduleResult`                     |
//!
//! # Step model
//!
//! A schedule maps a **1-based** step index to a value:
//!
//! ```text
//! schedule.at(1)  → value for the first step
//! schedule.at(2)  → value for the second step
//! schedule.at(0)  → out of domain (see `Schedule::checked_at`)
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SizeKind` and `Constant`. |

pub mod constant;
pub mod error;
pub mod func;
pub mod meta;
pub mod schedule;
pub mod stage;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use constant::Constant;
pub use error::{ScheduleError, ScheduleResult};
pub use func::{FromFn, RealFn, from_fn, from_real_fn};
pub use meta::{ElementType, SizeKind, Step};
pub use schedule::{ContinuousSchedule, Iterate, Schedule, ScheduleIter};
pub use stage::{BoxedSchedule, IntoStage};
