//! `IntoStage` — uniform lifting of "schedule or bare number".
//!
//! Combinators that hold several children (e.g. a piecewise sequence) store
//! them as one homogeneous list of [`BoxedSchedule`]s.  Callers may still
//! pass a bare number wherever a child is expected: it is lifted eagerly into
//! a [`Constant`] at construction time, so evaluation never has to ask
//! "number or schedule?".
//!
//! ```rust,ignore
//! let a: BoxedSchedule<f64> = 0.1.into_stage();                  // Constant(0.1)
//! let b: BoxedSchedule<f64> = from_fn(|t| t as f64).into_stage(); // boxed as-is
//! ```

use crate::{Constant, Schedule};

/// A type-erased schedule producing `T`.
pub type BoxedSchedule<T> = Box<dyn Schedule<Output = T>>;

/// Conversion into a child stage of a composite schedule.
pub trait IntoStage<T> {
    fn into_stage(self) -> BoxedSchedule<T>;
}

impl<S> IntoStage<S::Output> for S
where
    S: Schedule + 'static,
{
    #[inline]
    fn into_stage(self) -> BoxedSchedule<S::Output> {
        Box::new(self)
    }
}

/// Lift bare numbers into `Constant` stages.
macro_rules! lift_number {
    ($($num:ty),* $(,)?) => {$(
        impl IntoStage<$num> for $num {
            #[inline]
            fn into_stage(self) -> BoxedSchedule<$num> {
                Box::new(Constant::new(self))
            }
        }
    )*};
}

lift_number!(f32, f64, i32, i64, u32, u64, usize);
