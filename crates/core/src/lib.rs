//! coursetrack core data models.
//!
//! This crate defines the curriculum, score, and progress types shared by
//! the storage and engine layers.

#![warn(missing_docs)]

// Core identities
mod id;

// Curriculum and scoring
mod phase;
mod score;

// Per-learner state
mod error;
mod progress;

// Re-exports
pub use id::{CourseId, LearnerId, ProgressKey};

pub use phase::{
    clamp_phase, phase_spec, PhaseKind, PhaseSpec, ACTIVITY_PASSING_SCORE, CURRICULUM,
    EXAM_PASSING_SCORE, LAST_PHASE, PHASE_COUNT,
};
pub use score::{ScoreField, ScoreSheet};

pub use error::ProgressError;
pub use progress::ProgressState;
