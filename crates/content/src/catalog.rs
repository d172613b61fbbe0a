//! Course content records and per-phase view assembly.
//!
//! Content arrives from an external authoring source as a [`Course`] record
//! with optional per-phase material. [`phase_views`] projects it onto the
//! fixed curriculum, filling in titles, score limits, and activity defaults
//! so renderers never deal with missing pieces.

use std::collections::HashMap;

use coursetrack_core::{CourseId, PhaseKind, CURRICULUM, PHASE_COUNT};
use serde::{Deserialize, Serialize};

/// A scored activity attached to a lesson phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// What the learner is asked to do
    pub description: String,
    /// Maximum activity score
    #[serde(rename = "maxScore")]
    pub max_score: f64,
    /// Score required to pass
    #[serde(rename = "passingScore")]
    pub passing_score: f64,
}

impl Default for Activity {
    fn default() -> Self {
        Self {
            description: String::new(),
            max_score: 30.0,
            passing_score: 22.5,
        }
    }
}

/// Authored material for one phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseContent {
    /// Free-text body
    pub content: String,
    /// Optional lesson video URL
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    /// Activity descriptor, lesson phases only
    pub activity: Option<Activity>,
}

/// Authored material for all phases of a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursePhases {
    /// Introduction material
    pub introduction: Option<PhaseContent>,
    /// Lesson 1 material
    pub lesson1: Option<PhaseContent>,
    /// Quiz 1 material
    pub midterm: Option<PhaseContent>,
    /// Lesson 2 material
    pub lesson2: Option<PhaseContent>,
    /// Quiz 2 material
    #[serde(rename = "final")]
    pub final_exam: Option<PhaseContent>,
}

/// An authored course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identity
    pub id: CourseId,
    /// Display title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Per-phase material
    #[serde(default)]
    pub phases: CoursePhases,
}

/// Everything a renderer needs to show one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseView {
    /// Phase index
    pub index: usize,
    /// Display title
    pub title: &'static str,
    /// Content kind
    pub kind: PhaseKind,
    /// Free-text body
    pub content: String,
    /// Lesson video URL, if authored
    pub video_url: Option<String>,
    /// Activity descriptor, defaulted for lesson phases
    pub activity: Option<Activity>,
    /// Maximum raw score for the phase
    pub max_score: Option<f64>,
    /// Pass threshold for the phase
    pub passing_score: Option<f64>,
}

/// Project a course record onto the fixed curriculum.
///
/// Missing material yields empty content; lesson phases always get an
/// activity descriptor, defaulted when unauthored.
pub fn phase_views(course: &Course) -> Vec<PhaseView> {
    let authored: [Option<&PhaseContent>; PHASE_COUNT] = [
        course.phases.introduction.as_ref(),
        course.phases.lesson1.as_ref(),
        course.phases.midterm.as_ref(),
        course.phases.lesson2.as_ref(),
        course.phases.final_exam.as_ref(),
    ];

    CURRICULUM
        .iter()
        .zip(authored)
        .map(|(spec, material)| {
            let activity = match spec.kind {
                PhaseKind::Lesson => Some(
                    material
                        .and_then(|m| m.activity.clone())
                        .unwrap_or_default(),
                ),
                _ => None,
            };
            PhaseView {
                index: spec.index,
                title: spec.title,
                kind: spec.kind,
                content: material.map(|m| m.content.clone()).unwrap_or_default(),
                video_url: material.and_then(|m| m.video_url.clone()),
                activity,
                max_score: spec.max_score,
                passing_score: spec.passing_score,
            }
        })
        .collect()
}

/// Read-only course lookup.
pub trait CourseCatalog {
    /// Look up a course by id.
    fn course(&self, id: CourseId) -> Option<&Course>;
}

/// In-memory catalog over a fixed set of courses.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    courses: HashMap<CourseId, Course>,
}

impl StaticCatalog {
    /// Build a catalog from a list of courses.
    pub fn new(courses: impl IntoIterator<Item = Course>) -> Self {
        Self {
            courses: courses.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

impl CourseCatalog for StaticCatalog {
    fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_course() -> Course {
        Course {
            id: CourseId::new(),
            title: "Web Foundations".to_string(),
            description: String::new(),
            phases: CoursePhases::default(),
        }
    }

    #[test]
    fn bare_course_still_yields_five_views() {
        let views = phase_views(&bare_course());
        assert_eq!(views.len(), 5);
        assert_eq!(views[0].title, "Introduction");
        assert!(views[0].activity.is_none());

        // Lesson phases get the default activity.
        let activity = views[1].activity.as_ref().unwrap();
        assert_eq!(activity.max_score, 30.0);
        assert_eq!(activity.passing_score, 22.5);

        assert_eq!(views[2].max_score, Some(100.0));
        assert_eq!(views[2].passing_score, Some(75.0));
    }

    #[test]
    fn authored_material_flows_into_views() {
        let mut course = bare_course();
        course.phases.lesson1 = Some(PhaseContent {
            content: "Tags and attributes".to_string(),
            video_url: Some("https://youtu.be/abc123xyz".to_string()),
            activity: Some(Activity {
                description: "Build a page".to_string(),
                max_score: 30.0,
                passing_score: 22.5,
            }),
        });

        let views = phase_views(&course);
        assert_eq!(views[1].content, "Tags and attributes");
        assert_eq!(views[1].video_url.as_deref(), Some("https://youtu.be/abc123xyz"));
        assert_eq!(views[1].activity.as_ref().unwrap().description, "Build a page");
    }

    #[test]
    fn course_record_parses_wire_names() {
        let json = r#"{
            "id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
            "title": "Web Foundations",
            "phases": {
                "final": { "content": "Closing quiz" },
                "lesson2": { "activity": { "maxScore": 30, "passingScore": 22.5 } }
            }
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.phases.final_exam.as_ref().unwrap().content, "Closing quiz");
        assert!(course.phases.introduction.is_none());
    }

    #[test]
    fn catalog_lookup() {
        let course = bare_course();
        let id = course.id;
        let catalog = StaticCatalog::new([course]);
        assert!(catalog.course(id).is_some());
        assert!(catalog.course(CourseId::new()).is_none());
    }
}
