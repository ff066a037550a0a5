//! Questionnaire scoring — answers in, archetype out.
//!
//! The scorer is a pure function.  It holds no state, does no I/O, and is
//! total over its input: missing answers read as the neutral midpoint and
//! out-of-range answers are clamped, so every call produces a report.
//!
//! # Pipeline
//!
//! ```text
//! AnswerSet (27 optional raw values)
//!   ↓  clamp_score / neutral default
//! AxisAverages { e, i, pi, void_avg }
//!   ↓  void_avg >= 5.5 ?  ──yes──▶ Archetype::Void   (kill switch)
//!   ↓  no
//! Octant (H/L per axis, High = >= 4.0)
//!   ↓  8-row table
//! Archetype
//! ```
//!
//! Both the kill switch and the L/L/L octant yield `void`.  The `archetype`
//! field keeps them collapsed; [`Resolution`] records which path fired.

pub mod answers;
pub mod archetype;
pub mod axes;
pub mod classify;

pub use answers::{clamp_score, AnswerSet, QuestionId, NEUTRAL_SCORE, QUESTION_COUNT};
pub use archetype::{Archetype, Level, Octant};
pub use axes::{reverse_score, Axis, AxisAverages, AxisGroup};
pub use classify::{
    axis_averages, classify, resolve, score, score_archetype, Resolution, ScoreReport,
    HIGH_THRESHOLD, KILL_SWITCH_THRESHOLD,
};
