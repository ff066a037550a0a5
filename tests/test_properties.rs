//! Property-based tests for the scorer.

use proptest::prelude::*;

use elc::scoring::{
    clamp_score, score, AnswerSet, Archetype, QuestionId, Resolution, QUESTION_COUNT,
};

/// Strategy: any f64 a caller might send, including NaN, infinities and
/// values far off the scale.
fn raw_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => (1..=7i32).prop_map(f64::from),
        2 => -100.0..100.0f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

/// Strategy: a sparse answer set; each slot independently present or not.
fn answer_set() -> impl Strategy<Value = AnswerSet> {
    prop::collection::vec(prop::option::of(raw_value()), QUESTION_COUNT).prop_map(|slots| {
        let mut set = AnswerSet::new();
        for (q, v) in QuestionId::all().zip(slots) {
            if let Some(v) = v {
                set.set(q, v);
            }
        }
        set
    })
}

fn q(id: u8) -> QuestionId {
    QuestionId::new(id).unwrap()
}

proptest! {
    // 1. Every average stays on the scale
    #[test]
    fn averages_in_range(answers in answer_set()) {
        let avg = score(&answers).averages;
        for v in [avg.e, avg.i, avg.pi, avg.void_avg] {
            prop_assert!(v.is_finite());
            prop_assert!((1.0..=7.0).contains(&v), "average {v} off the scale");
        }
    }

    // 2. Scoring is deterministic, bit for bit
    #[test]
    fn score_deterministic(answers in answer_set()) {
        let a = score(&answers);
        let b = score(&answers);
        prop_assert_eq!(a.archetype, b.archetype);
        prop_assert_eq!(a.averages.e.to_bits(), b.averages.e.to_bits());
        prop_assert_eq!(a.averages.i.to_bits(), b.averages.i.to_bits());
        prop_assert_eq!(a.averages.pi.to_bits(), b.averages.pi.to_bits());
        prop_assert_eq!(a.averages.void_avg.to_bits(), b.averages.void_avg.to_bits());
    }

    // 3. A raw value scores exactly like its clamped value
    #[test]
    fn raw_equivalent_to_clamped(answers in answer_set(), id in 1..=27u8, raw in raw_value()) {
        let raw_set = answers.with(q(id), raw);
        let clamped_set = answers.with(q(id), clamp_score(raw));
        prop_assert_eq!(score(&raw_set), score(&clamped_set));
    }

    // 4. Maxed void questions always win
    #[test]
    fn void_kill_switch_dominates(answers in answer_set()) {
        let answers = answers.with(q(19), 7.0).with(q(20), 7.0).with(q(21), 7.0);
        let report = score(&answers);
        prop_assert_eq!(report.averages.void_avg, 7.0);
        prop_assert_eq!(report.archetype, Archetype::Void);
        prop_assert_eq!(report.resolution, Resolution::KillSwitch);
    }

    // 5. Below the kill switch, the archetype matches its octant
    #[test]
    fn octant_consistent(answers in answer_set()) {
        let report = score(&answers);
        if let Resolution::Octant(octant) = report.resolution {
            prop_assert_eq!(report.archetype.octant(), octant);
            prop_assert_eq!(report.averages.octant(), octant);
        }
    }
}

#[test]
fn out_of_range_values_match_boundaries() {
    for (raw, effective) in [(0.0, 1.0), (8.0, 7.0), (-5.0, 1.0), (f64::NAN, 4.0)] {
        assert_eq!(clamp_score(raw), effective);
        let raw_set = AnswerSet::new().with(q(1), raw).with(q(20), raw);
        let direct_set = AnswerSet::new().with(q(1), effective).with(q(20), effective);
        assert_eq!(score(&raw_set), score(&direct_set));
    }
}

#[test]
fn reverse_contributions() {
    // id 25 alone moves E by its reversed score: (20 + (8 - s)) / 6
    for (s, contribution) in [(1.0, 7.0), (4.0, 4.0), (7.0, 1.0)] {
        let e = score(&AnswerSet::new().with(q(25), s)).averages.e;
        assert_eq!(e, (20.0 + contribution) / 6.0);
    }
}

#[test]
fn empty_answers_are_circle() {
    let report = score(&AnswerSet::new());
    assert_eq!(report.archetype, Archetype::Circle);
    assert_eq!(report.averages.e, 4.0);
    assert_eq!(report.averages.i, 4.0);
    assert_eq!(report.averages.pi, 4.0);
    assert_eq!(report.averages.void_avg, 4.0);
}
