//! Answer sets — the 27 question slots a respondent fills in.
//!
//! The UI collects one 1–7 choice per question and hands the whole map to the
//! scorer.  Here that map is a fixed array indexed by [`QuestionId`]; every
//! read goes through [`AnswerSet::score`], which applies the neutral default
//! and the [1, 7] clamp in one place.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ElcError, Result};

/// Number of questions in the questionnaire.
pub const QUESTION_COUNT: usize = 27;

/// Lowest point on the Likert scale.
pub const SCALE_MIN: f64 = 1.0;
/// Highest point on the Likert scale.
pub const SCALE_MAX: f64 = 7.0;
/// Midpoint substituted for missing or non-finite answers.
pub const NEUTRAL_SCORE: f64 = 4.0;

/// A question identifier in `1..=27`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionId(u8);

impl QuestionId {
    /// Build an id, or `None` when outside `1..=27`.
    pub const fn new(id: u8) -> Option<Self> {
        if id >= 1 && id as usize <= QUESTION_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Const constructor for the axis tables.  Panics at compile time on a bad id.
    pub(crate) const fn fixed(id: u8) -> Self {
        match Self::new(id) {
            Some(q) => q,
            None => panic!("question id out of range"),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate all 27 ids in ascending order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (1..=QUESTION_COUNT as u8).map(QuestionId)
    }

    const fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for QuestionId {
    type Error = ElcError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value).ok_or_else(|| ElcError::InvalidQuestionId(value.to_string()))
    }
}

impl From<QuestionId> for u8 {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Map a raw response onto the scale.
///
/// Non-finite values fall back to [`NEUTRAL_SCORE`]; everything else is
/// clamped to `[1, 7]`.
pub fn clamp_score(raw: f64) -> f64 {
    if !raw.is_finite() {
        return NEUTRAL_SCORE;
    }
    raw.clamp(SCALE_MIN, SCALE_MAX)
}

/// Raw responses for one questionnaire run, possibly sparse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnswerSet {
    slots: [Option<f64>; QUESTION_COUNT],
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(id, value)` pairs.  Ids outside `1..=27` are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        let mut set = Self::new();
        for (id, value) in pairs {
            match u8::try_from(id).ok().and_then(QuestionId::new) {
                Some(q) => set.set(q, value),
                None => log::debug!("ignoring answer for unknown question id {}", id),
            }
        }
        set
    }

    /// Record a raw response, replacing any earlier one.
    pub fn set(&mut self, id: QuestionId, value: f64) {
        self.slots[id.slot()] = Some(value);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, id: QuestionId, value: f64) -> Self {
        self.set(id, value);
        self
    }

    pub fn clear(&mut self, id: QuestionId) {
        self.slots[id.slot()] = None;
    }

    /// The raw stored response, unclamped.
    pub fn get(&self, id: QuestionId) -> Option<f64> {
        self.slots[id.slot()]
    }

    /// Effective score used by every axis: missing → 4, otherwise [`clamp_score`].
    pub fn score(&self, id: QuestionId) -> f64 {
        self.get(id).map_or(NEUTRAL_SCORE, clamp_score)
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True once all 27 questions have a response.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == QUESTION_COUNT
    }

    /// Ids that still have no response.
    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionId::all().filter(|q| self.get(*q).is_none()).collect()
    }

    /// Decode a JSON object of `"id": value`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let raw: BTreeMap<String, Option<f64>> = serde_json::from_str(input)?;
        Self::from_raw_map(raw)
    }

    /// Decode a YAML mapping of `id: value`.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(input)?;
        let mut raw = BTreeMap::new();
        for (k, v) in mapping {
            let key = match k {
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::String(s) => s,
                other => return Err(ElcError::InvalidQuestionId(format!("{:?}", other))),
            };
            let value: Option<f64> = serde_yaml::from_value(v)?;
            raw.insert(key, value);
        }
        Self::from_raw_map(raw)
    }

    fn from_raw_map(raw: BTreeMap<String, Option<f64>>) -> Result<Self> {
        let mut pairs = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let Some(id) = parse_question_key(&key)? else {
                log::debug!("ignoring answer for out-of-range question id {}", key.trim());
                continue;
            };
            // null is an unanswered question, same as an absent key
            if let Some(v) = value {
                pairs.push((id, v));
            }
        }
        Ok(Self::from_pairs(pairs))
    }
}

/// Parse an answer-file key.
///
/// Integers too wide for `i64` are `Ok(None)` and get skipped like any other
/// out-of-range id; only keys that are not integers are an error.
fn parse_question_key(key: &str) -> Result<Option<i64>> {
    let trimmed = key.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ElcError::InvalidQuestionId(key.to_string()));
    }
    Ok(trimmed.parse().ok())
}

/// Serializes as a sparse `{ "id": value }` map of the answered questions.
impl Serialize for AnswerSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.answered_count()))?;
        for q in QuestionId::all() {
            if let Some(v) = self.get(q) {
                map.serialize_entry(&q.get().to_string(), &v)?;
            }
        }
        map.end()
    }
}

// ============================================================================
// Tests
// ============================================================================
