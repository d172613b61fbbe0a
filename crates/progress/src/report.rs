//! Point-in-time progress summaries.
//!
//! A report is a read-only projection of [`ProgressState`] over the
//! curriculum, one row per phase, for callers that render progress without
//! re-deriving the gating rules themselves.

use coursetrack_core::{PhaseKind, ProgressState, CURRICULUM, PHASE_COUNT};

/// Summary of one phase for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseReport {
    /// Phase index
    pub index: usize,
    /// Display title
    pub title: &'static str,
    /// Content kind
    pub kind: PhaseKind,
    /// Raw score in the phase's field, if it has one
    pub score: Option<f64>,
    /// Bonus-inclusive score the threshold is checked against
    pub effective_score: Option<f64>,
    /// Threshold, if the phase has one
    pub passing_score: Option<f64>,
    /// Explicitly marked done
    pub completed: bool,
    /// Completed or threshold met
    pub passed: bool,
}

/// Summary of a learner's progress across the whole curriculum.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// One row per phase, in phase order
    pub phases: Vec<PhaseReport>,
    /// Phases marked done
    pub completed_count: usize,
    /// Total phases in the curriculum
    pub phase_count: usize,
    /// Whether the last phase has been completed
    pub course_complete: bool,
}

impl ProgressReport {
    /// Build a report from the current state.
    pub fn for_state(state: &ProgressState) -> Self {
        let phases = CURRICULUM
            .iter()
            .map(|spec| {
                let score = spec.score_field.map(|field| state.scores.get(field));
                let effective_score = score.map(|raw| match spec.kind {
                    PhaseKind::Exam => raw + state.scores.game_points,
                    _ => raw,
                });
                PhaseReport {
                    index: spec.index,
                    title: spec.title,
                    kind: spec.kind,
                    score,
                    effective_score,
                    passing_score: spec.passing_score,
                    completed: state.completed_phases.contains(&spec.index),
                    // Indices come from the table, so this cannot be out of
                    // range.
                    passed: state.is_phase_passed(spec.index).unwrap_or(false),
                }
            })
            .collect();

        Self {
            phases,
            completed_count: state.completed_count(),
            phase_count: PHASE_COUNT,
            course_complete: state.is_course_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursetrack_core::ScoreField;

    #[test]
    fn zero_state_report() {
        let report = ProgressReport::for_state(&ProgressState::default());
        assert_eq!(report.phases.len(), 5);
        assert_eq!(report.completed_count, 0);
        assert!(!report.course_complete);
        assert!(report.phases[0].passed);
        assert!(report.phases[0].score.is_none());
        assert!(!report.phases[2].passed);
    }

    #[test]
    fn exam_rows_include_bonus_in_effective_score() {
        let mut state = ProgressState::default();
        state.scores.set(ScoreField::Midterm, 70.0).unwrap();
        state.scores.add_game_points(5.0).unwrap();

        let report = ProgressReport::for_state(&state);
        assert_eq!(report.phases[2].score, Some(70.0));
        assert_eq!(report.phases[2].effective_score, Some(75.0));
        assert!(report.phases[2].passed);

        // Lessons never count the bonus.
        assert_eq!(report.phases[1].effective_score, Some(0.0));
    }

    #[test]
    fn completing_the_last_phase_completes_the_course() {
        let mut state = ProgressState::default();
        state.mark_completed(4).unwrap();

        let report = ProgressReport::for_state(&state);
        assert!(report.course_complete);
        assert_eq!(report.completed_count, 1);
        assert!(report.phases[4].completed);
    }
}
