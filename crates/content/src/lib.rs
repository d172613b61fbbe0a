//! Course content collaborator.
//!
//! Read-only course records, per-phase view assembly, and lesson-video id
//! extraction.

#![warn(missing_docs)]

pub mod catalog;
pub mod video;

pub use catalog::{
    phase_views, Activity, Course, CourseCatalog, CoursePhases, PhaseContent, PhaseView,
    StaticCatalog,
};
pub use video::{embed_url, extract_video_id};
