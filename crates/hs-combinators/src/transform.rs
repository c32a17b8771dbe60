//! Mirror transforms over plain callables.
//!
//! These are thin higher-order helpers, not schedules: they take any
//! `Fn(N) -> T` and a period and return a new closure.  They carry no size or
//! element metadata and do not iterate.  To transform a schedule, pass a
//! closure that evaluates it:
//!
//! ```rust,ignore
//! let down = reverse(|t| warmup.at(t), 100);
//! ```

use std::ops::{Add, Sub};

/// `reverse(f, period)(t) == f(period - t)`.
pub fn reverse<N, T, F>(f: F, period: N) -> impl Fn(N) -> T
where
    F: Fn(N) -> T,
    N: Copy + Sub<Output = N>,
{
    move |t| f(period - t)
}

/// `f(t)` on the first half of `period`, `f(period - t)` on the second.
///
/// The midpoint `t == period / 2` belongs to the mirrored half.  The test is
/// written as `t + t < period` so integer periods compare exactly.
pub fn symmetric<N, T, F>(f: F, period: N) -> impl Fn(N) -> T
where
    F: Fn(N) -> T,
    N: Copy + PartialOrd + Add<Output = N> + Sub<Output = N>,
{
    move |t| {
        if t + t < period {
            f(t)
        } else {
            f(period - t)
        }
    }
}
