//! The fixed 5-phase curriculum.
//!
//! Every course runs the same sequence: Introduction, Lesson 1, Quiz 1,
//! Lesson 2, Quiz 2. Phase indices are 0-based and stable; they are what the
//! completed-phase set persists.

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;
use crate::score::ScoreField;

/// Number of phases in the curriculum.
pub const PHASE_COUNT: usize = 5;

/// Index of the last phase.
pub const LAST_PHASE: usize = PHASE_COUNT - 1;

/// Activity pass threshold (out of 30).
pub const ACTIVITY_PASSING_SCORE: f64 = 22.5;

/// Exam pass threshold (out of 100, bonus points count toward it).
pub const EXAM_PASSING_SCORE: f64 = 75.0;

/// What kind of content a phase carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseKind {
    /// Plain content, no scoring
    Introduction,
    /// Lesson with a scored activity
    Lesson,
    /// Exam scored out of 100, bonus points included
    Exam,
}

/// Static description of one phase in the curriculum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpec {
    /// Phase index, 0-based
    pub index: usize,
    /// Display title
    pub title: &'static str,
    /// Content kind
    pub kind: PhaseKind,
    /// Field scored in this phase, if any
    pub score_field: Option<ScoreField>,
    /// Maximum raw score for the phase
    pub max_score: Option<f64>,
    /// Threshold the (bonus-inclusive) score must reach
    pub passing_score: Option<f64>,
}

/// The curriculum, in phase order.
pub static CURRICULUM: [PhaseSpec; PHASE_COUNT] = [
    PhaseSpec {
        index: 0,
        title: "Introduction",
        kind: PhaseKind::Introduction,
        score_field: None,
        max_score: None,
        passing_score: None,
    },
    PhaseSpec {
        index: 1,
        title: "Lesson 1",
        kind: PhaseKind::Lesson,
        score_field: Some(ScoreField::Lesson1Activity),
        max_score: Some(30.0),
        passing_score: Some(ACTIVITY_PASSING_SCORE),
    },
    PhaseSpec {
        index: 2,
        title: "Quiz 1",
        kind: PhaseKind::Exam,
        score_field: Some(ScoreField::Midterm),
        max_score: Some(100.0),
        passing_score: Some(EXAM_PASSING_SCORE),
    },
    PhaseSpec {
        index: 3,
        title: "Lesson 2",
        kind: PhaseKind::Lesson,
        score_field: Some(ScoreField::Lesson2Activity),
        max_score: Some(30.0),
        passing_score: Some(ACTIVITY_PASSING_SCORE),
    },
    PhaseSpec {
        index: 4,
        title: "Quiz 2",
        kind: PhaseKind::Exam,
        score_field: Some(ScoreField::FinalExam),
        max_score: Some(100.0),
        passing_score: Some(EXAM_PASSING_SCORE),
    },
];

/// Look up a phase by index, rejecting out-of-range values.
pub fn phase_spec(index: usize) -> Result<&'static PhaseSpec, ProgressError> {
    CURRICULUM
        .get(index)
        .ok_or(ProgressError::PhaseOutOfRange(index))
}

/// Clamp an arbitrary index into the valid phase range.
///
/// Free navigation between phases is never gated, only bounded.
pub fn clamp_phase(index: usize) -> usize {
    index.min(LAST_PHASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curriculum_indices_are_positional() {
        for (i, spec) in CURRICULUM.iter().enumerate() {
            assert_eq!(spec.index, i);
        }
    }

    #[test]
    fn lookup_rejects_out_of_range() {
        assert!(phase_spec(4).is_ok());
        assert!(matches!(
            phase_spec(5),
            Err(ProgressError::PhaseOutOfRange(5))
        ));
    }

    #[test]
    fn clamp_bounds_navigation() {
        assert_eq!(clamp_phase(0), 0);
        assert_eq!(clamp_phase(3), 3);
        assert_eq!(clamp_phase(99), LAST_PHASE);
    }
}
