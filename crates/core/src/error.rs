//! Precondition-violation errors.
//!
//! Everything here is the caller passing an argument the curriculum cannot
//! represent. None of these are retried or shown to learners; they signal a
//! programming error at the call site.

use crate::score::ScoreField;

/// Invalid-argument conditions raised by progress operations.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// A score-field wire name that isn't part of the curriculum
    #[error("unknown score field: {0}")]
    UnknownField(String),

    /// A negative or non-finite score value
    #[error("score out of range for {field}: {value}")]
    ScoreOutOfRange {
        /// Field being set
        field: ScoreField,
        /// Rejected value
        value: f64,
    },

    /// A phase index outside 0..=4
    #[error("phase index out of range: {0}")]
    PhaseOutOfRange(usize),

    /// A negative bonus-point delta
    #[error("bonus points must be non-negative, got {0}")]
    NegativePoints(f64),
}
