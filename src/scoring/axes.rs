//! Axis groups and averaging.
//!
//! | Axis   | Direct ids                    | Reverse id |
//! |--------|-------------------------------|------------|
//! | `E`    | 1, 2, 3, 10, 22               | 25         |
//! | `I`    | 4, 5, 6, 11, 13, 14, 15, 24   | 26         |
//! | `PI`   | 7, 8, 9, 12, 23               | 27         |
//! | `void` | 19, 20, 21                    | —          |
//!
//! Questions 16–18 feed no axis.

use serde::{Deserialize, Serialize};

use super::answers::{AnswerSet, QuestionId, SCALE_MAX, SCALE_MIN};

/// One of the three primary axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    E,
    I,
    Pi,
}

impl Axis {
    /// Canonical key order for classification.
    pub const ALL: [Axis; 3] = [Axis::E, Axis::I, Axis::Pi];

    /// Question membership of this axis.
    pub fn group(self) -> &'static AxisGroup {
        match self {
            Axis::E => &E_GROUP,
            Axis::I => &I_GROUP,
            Axis::Pi => &PI_GROUP,
        }
    }

    /// Query-string key used on result links.
    pub fn key(self) -> &'static str {
        match self {
            Axis::E => "e",
            Axis::I => "i",
            Axis::Pi => "pi",
        }
    }
}

/// Fixed question membership of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisGroup {
    pub direct: &'static [QuestionId],
    /// Contributes `8 - score` instead of `score`.
    pub reverse: Option<QuestionId>,
}

const fn ids<const N: usize>(raw: [u8; N]) -> [QuestionId; N] {
    let mut out = [QuestionId::fixed(1); N];
    let mut i = 0;
    while i < N {
        out[i] = QuestionId::fixed(raw[i]);
        i += 1;
    }
    out
}

const E_DIRECT: [QuestionId; 5] = ids([1, 2, 3, 10, 22]);
const I_DIRECT: [QuestionId; 8] = ids([4, 5, 6, 11, 13, 14, 15, 24]);
const PI_DIRECT: [QuestionId; 5] = ids([7, 8, 9, 12, 23]);
const VOID_IDS: [QuestionId; 3] = ids([19, 20, 21]);

pub const E_GROUP: AxisGroup = AxisGroup {
    direct: &E_DIRECT,
    reverse: Some(QuestionId::fixed(25)),
};

pub const I_GROUP: AxisGroup = AxisGroup {
    direct: &I_DIRECT,
    reverse: Some(QuestionId::fixed(26)),
};

pub const PI_GROUP: AxisGroup = AxisGroup {
    direct: &PI_DIRECT,
    reverse: Some(QuestionId::fixed(27)),
};

/// Auxiliary axis driving the kill switch.
pub const VOID_GROUP: AxisGroup = AxisGroup {
    direct: &VOID_IDS,
    reverse: None,
};

/// Contribution of a reverse-scored question.
pub fn reverse_score(score: f64) -> f64 {
    (SCALE_MIN + SCALE_MAX) - score
}

impl AxisGroup {
    /// Number of questions averaged, reverse item included.
    pub fn len(&self) -> usize {
        self.direct.len() + usize::from(self.reverse.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean of the group's clamped scores.
    pub fn average(&self, answers: &AnswerSet) -> f64 {
        let direct: f64 = self.direct.iter().map(|&q| answers.score(q)).sum();
        let reverse = self.reverse.map_or(0.0, |q| reverse_score(answers.score(q)));
        (direct + reverse) / self.len() as f64
    }
}

/// The four axis means for one answer set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAverages {
    pub e: f64,
    pub i: f64,
    pub pi: f64,
    #[serde(rename = "voidAvg")]
    pub void_avg: f64,
}

impl AxisAverages {
    /// Average every axis group over `answers`.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        Self {
            e: Axis::E.group().average(answers),
            i: Axis::I.group().average(answers),
            pi: Axis::Pi.group().average(answers),
            void_avg: VOID_GROUP.average(answers),
        }
    }

    /// Mean for one primary axis.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::E => self.e,
            Axis::I => self.i,
            Axis::Pi => self.pi,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: u8) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(E_GROUP.len(), 6);
        assert_eq!(I_GROUP.len(), 9);
        assert_eq!(PI_GROUP.len(), 6);
        assert_eq!(VOID_GROUP.len(), 3);
    }

    #[test]
    fn test_groups_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for g in [&E_GROUP, &I_GROUP, &PI_GROUP, &VOID_GROUP] {
            for q in g.direct.iter().copied().chain(g.reverse) {
                assert!(seen.insert(q), "{} appears in two groups", q);
            }
        }
        // 16, 17, 18 are unscored
        assert_eq!(seen.len(), 24);
        for id in [16, 17, 18] {
            assert!(!seen.contains(&q(id)));
        }
    }

    #[test]
    fn test_reverse_score() {
        assert_eq!(reverse_score(1.0), 7.0);
        assert_eq!(reverse_score(4.0), 4.0);
        assert_eq!(reverse_score(7.0), 1.0);
    }

    #[test]
    fn test_reverse_item_uses_clamped_score() {
        let answers = AnswerSet::new().with(q(25), 12.0);
        // 5 neutral + (8 - 7)
        assert!((E_GROUP.average(&answers) - 21.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_answers_average_neutral() {
        let avg = AxisAverages::from_answers(&AnswerSet::new());
        assert_eq!(avg.e, 4.0);
        assert_eq!(avg.i, 4.0);
        assert_eq!(avg.pi, 4.0);
        assert_eq!(avg.void_avg, 4.0);
    }

    #[test]
    fn test_i_axis_divides_by_nine() {
        let mut answers = AnswerSet::new();
        for id in [4, 5, 6, 11, 13, 14, 15, 24] {
            answers.set(q(id), 1.0);
        }
        answers.set(q(26), 7.0);
        assert_eq!(AxisAverages::from_answers(&answers).i, 1.0);
    }

    #[test]
    fn test_unscored_questions_have_no_effect() {
        let answers = AnswerSet::new().with(q(16), 7.0).with(q(17), 1.0).with(q(18), 7.0);
        assert_eq!(
            AxisAverages::from_answers(&answers),
            AxisAverages::from_answers(&AnswerSet::new())
        );
    }

    #[test]
    fn test_averages_serialize_void_avg_key() {
        let avg = AxisAverages::from_answers(&AnswerSet::new());
        let json = serde_json::to_value(avg).unwrap();
        assert_eq!(json["voidAvg"], 4.0);
        assert_eq!(json["pi"], 4.0);
    }

    #[test]
    fn test_axis_group_lookup() {
        assert_eq!(Axis::E.group().reverse, Some(q(25)));
        assert_eq!(Axis::I.group().reverse, Some(q(26)));
        assert_eq!(Axis::Pi.group().reverse, Some(q(27)));
        assert_eq!(Axis::I.group().len(), 9);
    }

    #[test]
    fn test_get_matches_fields() {
        let answers = AnswerSet::new().with(q(1), 7.0).with(q(4), 1.0).with(q(27), 1.0);
        let avg = AxisAverages::from_answers(&answers);
        for axis in Axis::ALL {
            assert_eq!(avg.get(axis), axis.group().average(&answers));
        }
        assert_eq!(avg.get(Axis::E), avg.e);
        assert_eq!(avg.get(Axis::Pi), avg.pi);
    }

    #[test]
    fn test_axis_keys() {
        let keys: Vec<_> = Axis::ALL.iter().map(|a| a.key()).collect();
        assert_eq!(keys, ["e", "i", "pi"]);
    }
}
