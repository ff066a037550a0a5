//! Errors at the crate's outer surfaces.
//!
//! Scoring itself never fails; these cover decoding answer files, parsing
//! archetype slugs, configuration, and command-line usage.

use thiserror::Error;

/// Errors raised outside the scorer.
#[derive(Debug, Error)]
pub enum ElcError {
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Slug is not one of the eight archetypes.
    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    /// Answer key is not an integer question id.
    #[error("Invalid question id: {0}")]
    InvalidQuestionId(String),

    /// Strict mode requires all 27 answers.
    #[error("Incomplete answer set: {answered} of 27 questions answered")]
    Incomplete { answered: usize },

    /// Bad command-line or config value.
    #[error("Usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, ElcError>;
