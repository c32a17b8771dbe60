use crate::{ContinuousSchedule, Iterate, Schedule, SizeKind, Step};

/// A schedule that ignores its step and always yields `value`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant<T> {
    pub value: T,
}

impl<T> Constant<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone + Send + Sync> Schedule for Constant<T> {
    type Output = T;

    #[inline]
    fn at(&self, _t: Step) -> T {
        self.value.clone()
    }

    fn size_kind(&self) -> SizeKind {
        SizeKind::Infinite
    }
}

impl<T: Clone + Send + Sync> ContinuousSchedule for Constant<T> {
    #[inline]
    fn at_real(&self, _t: f64) -> T {
        self.value.clone()
    }
}

impl<T: Clone + Send + Sync> Iterate for Constant<T> {
    type State = Step;

    fn initial_state(&self) -> Step {
        1
    }

    fn step(&self, state: Option<Step>) -> (T, Step) {
        let t = state.unwrap_or(1);
        (self.value.clone(), t + 1)
    }
}
