//! Per-learner progress state and gating predicates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;
use crate::phase::{phase_spec, PhaseKind, LAST_PHASE, PHASE_COUNT};
use crate::score::ScoreSheet;

/// Everything persisted for one (course, learner) pair.
///
/// This is exactly the shape of the stored blob: the score sheet plus the
/// set of phases the learner explicitly marked done. The phase the learner
/// is currently looking at deliberately lives elsewhere and is not part of
/// this record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressState {
    /// Score sheet
    pub scores: ScoreSheet,

    /// Phases explicitly marked complete. A set, so marking is idempotent
    /// and serialization order never matters.
    #[serde(rename = "completedPhases")]
    pub completed_phases: BTreeSet<usize>,
}

impl ProgressState {
    /// Whether the phase's score threshold is currently met.
    ///
    /// Purely score-derived: re-evaluates from the sheet on every call and
    /// ignores the completed set entirely. Phase 0 has no threshold and is
    /// always met; exams count bonus points toward their threshold.
    pub fn meets_threshold(&self, phase: usize) -> Result<bool, ProgressError> {
        let spec = phase_spec(phase)?;
        let (Some(passing), Some(field)) = (spec.passing_score, spec.score_field) else {
            return Ok(true);
        };
        let score = match spec.kind {
            PhaseKind::Exam => self.scores.get(field) + self.scores.game_points,
            _ => self.scores.get(field),
        };
        Ok(score >= passing)
    }

    /// Whether the phase counts as passed: explicitly completed, or its
    /// threshold holds right now.
    pub fn is_phase_passed(&self, phase: usize) -> Result<bool, ProgressError> {
        if self.completed_phases.contains(&phase) {
            phase_spec(phase)?;
            return Ok(true);
        }
        self.meets_threshold(phase)
    }

    /// Mark a phase complete. Returns `true` if it was newly inserted.
    ///
    /// No threshold check happens here: "completed" records that the learner
    /// moved on from the phase, while pass/fail stays re-derivable from the
    /// scores. Advancement gating is the caller's policy.
    pub fn mark_completed(&mut self, phase: usize) -> Result<bool, ProgressError> {
        phase_spec(phase)?;
        Ok(self.completed_phases.insert(phase))
    }

    /// Whether the record respects the curriculum's invariants: every
    /// completed index names a real phase and every score sits within its
    /// field's bounds.
    ///
    /// The mutating operations preserve this; a record deserialized from
    /// storage may not. A record that parses but fails this check is
    /// treated the same as one that does not parse at all.
    pub fn is_well_formed(&self) -> bool {
        self.completed_phases.iter().all(|&p| p < PHASE_COUNT) && self.scores.is_well_formed()
    }

    /// How many phases have been marked complete.
    pub fn completed_count(&self) -> usize {
        self.completed_phases.len()
    }

    /// Whether every phase up to and including the last has been completed.
    pub fn is_course_complete(&self) -> bool {
        self.completed_phases.contains(&LAST_PHASE)
    }
}
