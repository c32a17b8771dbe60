//! Unit tests for hs-combinators.

use hs_core::{
    Constant, ElementType, Iterate, Schedule, ScheduleError, SizeKind, from_fn, from_real_fn,
};

use crate::{Interpolator, Loop, Sequence, SequenceState, reverse, symmetric};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Stages that report `stage * 1000 + local_step`.  With sizes 3, 2, 4:
///
///   t      1 2 3 | 4 5 | 6 7 8 9 | 10 ...
///   stage  0 0 0 | 1 1 | 2 2 2 2 |  2 ...
fn tagged(sizes: &[u64]) -> Sequence<u64> {
    Sequence::from_pairs(
        sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| (from_fn(move |t| i as u64 * 1000 + t), n)),
    )
    .unwrap()
}

// ── Sequence ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sequence {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let err = Sequence::<f64>::new(vec![1.0_f64, 2.0], vec![5]).err();
        assert_eq!(err, Some(ScheduleError::LengthMismatch { stages: 2, step_sizes: 1 }));
    }

    #[test]
    fn rejects_empty() {
        let err = Sequence::<f64>::new(Vec::<f64>::new(), vec![]).err();
        assert_eq!(err, Some(ScheduleError::EmptySequence));
    }

    #[test]
    fn rejects_zero_step_size() {
        let err = Sequence::<f64>::new(vec![1.0_f64, 2.0, 3.0], vec![4, 0, 1]).err();
        assert_eq!(err, Some(ScheduleError::ZeroStepSize { stage: 1 }));
    }

    #[test]
    fn boundaries_are_cumulative() {
        let seq = tagged(&[3, 2, 4]);
        assert_eq!(seq.boundaries(), &[3, 5, 9]);
        assert_eq!(seq.step_sizes(), &[3, 2, 4]);
        assert_eq!(seq.stage_count(), 3);
    }

    #[test]
    fn boundary_step_belongs_to_closing_window() {
        let seq = tagged(&[3, 2, 4]);
        assert_eq!(seq.stage_at(1), (0, 1));
        assert_eq!(seq.stage_at(3), (0, 3)); // t == boundary → still stage 0
        assert_eq!(seq.stage_at(4), (1, 1));
        assert_eq!(seq.stage_at(5), (1, 2));
        assert_eq!(seq.stage_at(6), (2, 1));
        assert_eq!(seq.stage_at(9), (2, 4));
    }

    #[test]
    fn last_stage_is_open_ended() {
        let seq = tagged(&[3, 2, 4]);
        // Past the final boundary the last stage keeps counting from its own start.
        assert_eq!(seq.at(10), 2005);
        assert_eq!(seq.at(1_000), 2000 + 1_000 - 5);
    }

    #[test]
    fn children_see_local_steps() {
        let seq = tagged(&[3, 2, 4]);
        let got: Vec<u64> = (1..=7).map(|t| seq.at(t)).collect();
        assert_eq!(got, vec![1, 2, 3, 1001, 1002, 2001, 2002]);
    }

    #[test]
    fn open_ended_matches_second_stage_formula() {
        let (n1, n2) = (4, 6);
        let s2 = from_fn(|t| t * 7);
        let seq: Sequence<u64> = crate::sequence![0_u64 => n1, s2 => n2].unwrap();
        for t in (n1 + n2 + 1)..(n1 + n2 + 50) {
            assert_eq!(seq.at(t), s2.at(t - n1));
        }
    }

    #[test]
    fn single_stage_collapses_to_child() {
        let child = from_fn(|t| t * t);
        let seq: Sequence<u64> = Sequence::new([child], vec![5]).unwrap();
        for t in 1..40 {
            assert_eq!(seq.at(t), child.at(t));
        }
    }

    #[test]
    fn bare_numbers_are_lifted() {
        let seq: Sequence<f64> = Sequence::new(vec![0.1_f64, 0.01, 0.001], vec![2, 2, 1]).unwrap();
        let got: Vec<f64> = (1..=6).map(|t| seq.at(t)).collect();
        assert_eq!(got, vec![0.1, 0.1, 0.01, 0.01, 0.001, 0.001]);
    }

    #[test]
    fn macro_accepts_mixed_stages() {
        let seq: Sequence<f64> = crate::sequence![
            from_fn(|t| t as f64 / 4.0) => 4,
            1.0_f64                     => 3,
            0.5_f64                     => 1,
        ]
        .unwrap();
        let got: Vec<f64> = (1..=9).map(|t| seq.at(t)).collect();
        assert_eq!(got, vec![0.25, 0.5, 0.75, 1.0, 1.0, 1.0, 1.0, 0.5, 0.5]);
    }

    #[test]
    fn metadata() {
        let seq = tagged(&[1, 1]);
        assert_eq!(seq.size_kind(), SizeKind::Unknown);
        assert_eq!(seq.element_type(), ElementType::Unknown);
        assert!(!seq.element_type().is_known());
    }

    #[test]
    fn iteration_state_machine() {
        let seq = tagged(&[2, 1]);
        let (v, s) = seq.step(None);
        assert_eq!(v, 1);
        assert_eq!(s, SequenceState { t: 2, stage: 0, origin: 1 });
        let (v, s) = seq.step(Some(s));
        assert_eq!(v, 2);
        let (v, s) = seq.step(Some(s));
        assert_eq!(v, 1001);
        assert_eq!(s, SequenceState { t: 4, stage: 1, origin: 3 });
        let (v, s) = seq.step(Some(s));
        assert_eq!(v, 1002);
        assert_eq!(s.stage, 1); // pinned on the last stage
    }

    #[test]
    fn huge_step_size_stays_on_first_stage() {
        let seq = tagged(&[u64::MAX, 1]);
        let (v, s) = seq.step(None);
        assert_eq!(v, seq.at(1));
        assert_eq!(s, SequenceState { t: 2, stage: 0, origin: 1 });
        let (v, s) = seq.step(Some(s));
        assert_eq!(v, seq.at(2));
        assert_eq!(v, 2);
        assert_eq!(s.stage, 0);
    }

    #[test]
    fn iteration_agrees_with_direct_evaluation() {
        let seq = tagged(&[3, 2, 4]);
        for (t, v) in (1..=45).zip(seq.iter()) {
            assert_eq!(v, seq.at(t), "disagreement at t = {t}");
        }
    }

    #[test]
    fn shared_across_threads() {
        let seq = tagged(&[3, 2, 4]);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (1..=8u64)
                .map(|t| {
                    let seq = &seq;
                    scope.spawn(move || seq.at(t))
                })
                .collect();
            let got: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(got, vec![1, 2, 3, 1001, 1002, 2001, 2002, 2003]);
        });
    }
}

// ── Loop ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod periodic {
    use super::*;

    #[test]
    fn rejects_zero_period() {
        assert_eq!(Loop::new(from_fn(|t| t), 0).err(), Some(ScheduleError::ZeroPeriod));
    }

    #[test]
    fn wraps_one_based() {
        let l = Loop::new(from_fn(|t| t), 3).unwrap();
        let got: Vec<u64> = (1..=7).map(|t| l.at(t)).collect();
        assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(l.wrap(3), 3); // never 0
        assert_eq!(l.period(), 3);
        assert_eq!(l.inner().at(5), 5); // unwrapped
    }

    #[test]
    fn period_one_is_constant() {
        let l = Loop::new(from_fn(|t| t * 9), 1).unwrap();
        for t in 1..30 {
            assert_eq!(l.at(t), 9);
        }
    }

    #[test]
    fn metadata_forwards_element_type() {
        let l = Loop::new(from_fn(|t| t as f32), 4).unwrap();
        assert_eq!(l.size_kind(), SizeKind::Infinite);
        assert_eq!(l.element_type().name(), Some("f32"));
    }

    #[test]
    fn loops_a_sequence() {
        // Warm up for 2 steps, hold for 3, then restart: a 5-step cycle.
        let cycle: Sequence<u64> = crate::sequence![
            from_fn(|t| t * 10) => 2,
            100_u64             => 3,
        ]
        .unwrap();
        let l = Loop::new(cycle, 5).unwrap();
        let got: Vec<u64> = l.iter().take(11).collect();
        assert_eq!(got, vec![10, 20, 100, 100, 100, 10, 20, 100, 100, 100, 10]);
    }
}

// ── Interpolator ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod interpolator {
    use hs_core::ContinuousSchedule;

    use super::*;

    #[test]
    fn rejects_bad_rates() {
        let id = from_real_fn(|t: f64| t);
        assert_eq!(Interpolator::new(id, 0.0).err(), Some(ScheduleError::InvalidRate(0.0)));
        assert!(Interpolator::new(id, f64::INFINITY).is_err());
        assert!(Interpolator::new(id, f64::NAN).is_err());
    }

    #[test]
    fn rescales_input() {
        let s = from_real_fn(|t: f64| t);
        let i = Interpolator::new(s, 4.0).unwrap();
        assert_eq!(i.at(1), 0.25);
        assert_eq!(i.at(6), 1.5);
        assert_eq!(i.at_real(2.0), 0.5);
        assert_eq!(i.rate(), 4.0);
        assert_eq!(i.inner().at_real(2.0), 2.0);
    }

    #[test]
    fn linear_in_step() {
        let s = from_real_fn(|t: f64| 3.0 * t - 1.0);
        let rate = 2.5;
        let i = Interpolator::new(s, rate).unwrap();
        for t in 1..=40u64 {
            assert_eq!(i.at(t), s.at_real(t as f64 / rate));
        }
    }

    #[test]
    fn nested_rates_compose() {
        let s = from_real_fn(|t: f64| t);
        let i = Interpolator::new(Interpolator::new(s, 2.0).unwrap(), 2.0).unwrap();
        assert_eq!(i.at(8), 2.0);
        assert_eq!(i.at(2), 0.5);
    }

    #[test]
    fn metadata_is_forwarded() {
        let over_const = Interpolator::new(Constant::new(1.0_f64), 3.0).unwrap();
        assert_eq!(over_const.size_kind(), SizeKind::Infinite);
        let over_fn = Interpolator::new(from_real_fn(|t: f64| t as f32), 3.0).unwrap();
        assert_eq!(over_fn.size_kind(), SizeKind::Unknown);
        assert_eq!(over_fn.element_type().name(), Some("f32"));
    }

    #[test]
    fn iteration_mirrors_evaluation() {
        let i = Interpolator::new(from_real_fn(|t: f64| t * t), 2.0).unwrap();
        let got: Vec<f64> = i.iter().take(4).collect();
        assert_eq!(got, vec![0.25, 1.0, 2.25, 4.0]);
    }
}

// ── Transforms ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod transform {
    use super::*;

    #[test]
    fn reverse_mirrors_about_period() {
        let f = |t: i64| t * 3 + 1;
        let r = reverse(f, 10);
        assert_eq!(r(0), f(10));
        assert_eq!(r(10), f(0));
        assert_eq!(r(3), f(7));
    }

    #[test]
    fn reverse_a_schedule() {
        let warmup = from_fn(|t| t * 2);
        let r = reverse(|t| warmup.at(t), 6);
        assert_eq!(r(1), 10);
        assert_eq!(r(5), 2);
    }

    #[test]
    fn symmetric_is_triangular() {
        let f = |t: i64| t;
        let s = symmetric(f, 10);
        let got: Vec<i64> = (0..=10).map(&s).collect();
        assert_eq!(got, vec![0, 1, 2, 3, 4, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn symmetric_midpoint_takes_mirrored_branch() {
        let f = |t: i64| 100 + t;
        let s = symmetric(f, 10);
        assert_eq!(s(5), f(10 - 5));
        assert_eq!(s(5), f(5));

        let g = |t: f64| t * 2.0;
        let sg = symmetric(g, 10.0);
        assert_eq!(sg(5.0), g(5.0));
        assert_eq!(sg(4.9), g(4.9));
        assert_eq!(sg(5.1), g(10.0 - 5.1));
    }

    #[test]
    fn symmetric_odd_period() {
        // 4 < 4.5 → direct; 5 ≥ 4.5 → mirrored.
        let s = symmetric(|t: u64| t, 9);
        assert_eq!(s(4), 4);
        assert_eq!(s(5), 4);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn sequence_iteration_matches_direct_evaluation(
            sizes in prop::collection::vec(1u64..8, 1..5),
            multiples in 1u64..4,
        ) {
            let seq = tagged(&sizes);
            let total: u64 = sizes.iter().sum();
            for (t, v) in (1..=total * (multiples + 2)).zip(seq.iter()) {
                prop_assert_eq!(v, seq.at(t));
            }
        }

        #[test]
        fn sequence_last_stage_never_runs_out(
            n1 in 1u64..20,
            n2 in 1u64..20,
            extra in 1u64..500,
        ) {
            let seq = tagged(&[n1, n2]);
            let t = n1 + n2 + extra;
            prop_assert_eq!(seq.at(t), 1000 + t - n1);
        }

        #[test]
        fn loop_is_periodic(period in 1u64..20, t in 1u64..1_000) {
            let f = from_fn(|t| t * 31 + 7);
            let l = Loop::new(f, period).unwrap();
            prop_assert_eq!(l.at(t), l.at(t + period));
            prop_assert_eq!(l.at(t), f.at((t - 1) % period + 1));
        }
    }
}
