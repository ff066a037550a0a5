//! # ELC
//!
//! Scoring and classification for the 27-question ELC questionnaire.
//!
//! Answers on a 1–7 scale are averaged into three primary axes (`E`, `I`,
//! `PI`) and an auxiliary `void` axis.  A high `void` average forces the
//! `void` archetype; otherwise each primary axis is split at 4.0 and the
//! resulting octant picks one of eight archetypes.
//!
//! ```
//! use elc::scoring::{score, AnswerSet, Archetype};
//!
//! let report = score(&AnswerSet::new());
//! assert_eq!(report.archetype, Archetype::Circle);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod link;
pub mod scoring;

pub use config::{ElcConfig, OutputFormat};
pub use error::{ElcError, Result};
pub use link::{AxisReadout, ResultLink};
pub use scoring::{
    axis_averages, classify, score, score_archetype, AnswerSet, Archetype, AxisAverages,
    QuestionId, Resolution, ScoreReport,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
