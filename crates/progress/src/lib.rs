//! Course progress engine.
//!
//! Score tracking, phase gating, and write-through persistence for the
//! fixed 5-phase curriculum.

#![warn(missing_docs)]

pub mod engine;
pub mod report;

pub use engine::{CourseProgressEngine, PhaseAdvance, SaveStatus};
pub use report::{PhaseReport, ProgressReport};
