//! `hs-cursor` — drive a schedule from inside an imperative training loop.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`advance`] | `AdvancePolicy` trait, `AlwaysAdvance`                    |
//! | [`cursor`]  | `Stateful`                                                |
//!
//! # Cursor model (summary)
//!
//! A [`Stateful`] cursor owns a step counter starting at `1`.  Each call to
//! [`Stateful::next_value`]:
//!
//! ```text
//! value = schedule.at(state)
//! if advance(state) { state += 1 }
//! return value
//! ```
//!
//! The wrapped schedule is read-only; several cursors may share one schedule
//! (via `&S` or `Arc<S>`) and each keeps its own counter.

pub mod advance;
pub mod cursor;


pub use advance::{AdvancePolicy, AlwaysAdvance};
pub use cursor::Stateful;
