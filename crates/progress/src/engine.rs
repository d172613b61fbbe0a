//! The course-progress engine.
//!
//! One engine instance owns the in-session state for a single (course,
//! learner) pair: the score sheet, the completed-phase set, and the phase
//! currently on screen. Every mutation writes the whole state back through
//! the store before returning, so call order is write order. Losing a write
//! never blocks the learner: in-memory state stays authoritative for the
//! session and the caller only gets a non-fatal [`SaveStatus::Unsaved`].

use std::sync::Arc;

use coursetrack_core::{
    clamp_phase, CourseId, LearnerId, ProgressError, ProgressKey, ProgressState, ScoreField,
    LAST_PHASE,
};
use coursetrack_storage::ProgressStore;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Whether a mutation's write-through reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// The state is persisted.
    Saved,
    /// The write failed (after one retry); in-memory state still advanced.
    Unsaved,
}

/// Result of completing a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseAdvance {
    /// Phase to show next. Stays on the last phase when the curriculum is
    /// exhausted.
    pub next_phase: usize,
    /// Whether the last phase has now been completed.
    pub course_complete: bool,
    /// Outcome of the write-through.
    pub save: SaveStatus,
}

/// Progress engine for one (course, learner) pair.
pub struct CourseProgressEngine<S: ProgressStore> {
    key: ProgressKey,
    state: ProgressState,
    current_phase: usize,
    /// Set when the latest state has not reached the store.
    dirty: bool,
    store: Arc<Mutex<S>>,
}

impl<S: ProgressStore> CourseProgressEngine<S> {
    /// Load the persisted state for a (course, learner) pair.
    ///
    /// Never fails: a missing record, a malformed record, or an unavailable
    /// store all degrade to the zero state with a logged warning. The
    /// displayed phase always starts at 0; it is session-local and not part
    /// of the record.
    pub async fn load(store: Arc<Mutex<S>>, course: CourseId, learner: LearnerId) -> Self {
        let key = ProgressKey::new(course, learner);
        let blob = {
            let guard = store.lock().await;
            guard.read(&key).await
        };
        let state = match blob {
            Ok(Some(blob)) => match serde_json::from_str::<ProgressState>(&blob) {
                Ok(state) if state.is_well_formed() => state,
                Ok(_) => {
                    warn!(%key, "progress record out of curriculum bounds, starting fresh");
                    ProgressState::default()
                }
                Err(err) => {
                    warn!(%key, error = %err, "malformed progress record, starting fresh");
                    ProgressState::default()
                }
            },
            Ok(None) => ProgressState::default(),
            Err(err) => {
                warn!(%key, error = %err, "progress store unavailable, starting fresh");
                ProgressState::default()
            }
        };

        Self {
            key,
            state,
            current_phase: 0,
            dirty: false,
            store,
        }
    }

    /// Storage key this engine reads and writes.
    pub fn key(&self) -> &ProgressKey {
        &self.key
    }

    /// Current in-session state.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Phase currently displayed.
    pub fn current_phase(&self) -> usize {
        self.current_phase
    }

    /// Replace a score field and persist.
    ///
    /// Replace semantics: the previous value is discarded. Values above the
    /// field's maximum clamp; negative or non-finite values are rejected.
    pub async fn set_score(
        &mut self,
        field: ScoreField,
        value: f64,
    ) -> Result<SaveStatus, ProgressError> {
        self.state.scores.set(field, value)?;
        debug!(key = %self.key, %field, value, "score updated");
        Ok(self.persist().await)
    }

    /// Add claimed mini-game points on top of the current bonus and persist.
    ///
    /// Additive, unlike [`set_score`](Self::set_score): bonus points only
    /// ever grow within a session.
    pub async fn add_game_points(&mut self, points: f64) -> Result<SaveStatus, ProgressError> {
        self.state.scores.add_game_points(points)?;
        debug!(key = %self.key, points, total = self.state.scores.game_points, "bonus points claimed");
        Ok(self.persist().await)
    }

    /// Whether a phase counts as passed (completed, or threshold met).
    pub fn is_phase_passed(&self, phase: usize) -> Result<bool, ProgressError> {
        self.state.is_phase_passed(phase)
    }

    /// Whether a phase's score threshold is met, ignoring the completed set.
    pub fn meets_threshold(&self, phase: usize) -> Result<bool, ProgressError> {
        self.state.meets_threshold(phase)
    }

    /// Whether the continue control should be enabled for the displayed
    /// phase. The introduction is never gated.
    pub fn can_continue(&self) -> bool {
        self.current_phase == 0 || self.state.is_phase_passed(self.current_phase).unwrap_or(false)
    }

    /// Mark a phase done and advance.
    ///
    /// Insertion is idempotent and unconditional: no threshold check happens
    /// here. Gating the continue control is the caller's policy (see
    /// [`can_continue`](Self::can_continue)); the engine records that the
    /// learner moved on. Persists when the set actually grew, or when an
    /// earlier write is still unflushed. On the last phase, the engine stays
    /// put and reports the course complete.
    pub async fn complete_phase(&mut self, phase: usize) -> Result<PhaseAdvance, ProgressError> {
        let save = if self.state.mark_completed(phase)? || self.dirty {
            self.persist().await
        } else {
            SaveStatus::Saved
        };

        let (next_phase, course_complete) = if phase < LAST_PHASE {
            (phase + 1, false)
        } else {
            (phase, true)
        };
        self.current_phase = next_phase;

        debug!(key = %self.key, phase, next_phase, course_complete, "phase completed");
        Ok(PhaseAdvance {
            next_phase,
            course_complete,
            save,
        })
    }

    /// Jump the displayed phase. Clamps to the curriculum bounds; free
    /// navigation is never gated.
    pub fn navigate_to(&mut self, phase: usize) -> usize {
        self.current_phase = clamp_phase(phase);
        self.current_phase
    }

    /// Write the full state through to the store, retrying once. Tracks
    /// whether the state reached the store so a later mutation can flush a
    /// failed write.
    async fn persist(&mut self) -> SaveStatus {
        let save = self.try_persist().await;
        self.dirty = save == SaveStatus::Unsaved;
        save
    }

    async fn try_persist(&self) -> SaveStatus {
        let blob = match serde_json::to_string_pretty(&self.state) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(key = %self.key, error = %err, "progress state failed to serialize");
                return SaveStatus::Unsaved;
            }
        };

        let mut guard = self.store.lock().await;
        match guard.write(&self.key, &blob).await {
            Ok(()) => SaveStatus::Saved,
            Err(first) => match guard.write(&self.key, &blob).await {
                Ok(()) => SaveStatus::Saved,
                Err(retry) => {
                    warn!(
                        key = %self.key,
                        first = %first,
                        retry = %retry,
                        "progress not saved, continuing with in-memory state"
                    );
                    SaveStatus::Unsaved
                }
            },
        }
    }
}
