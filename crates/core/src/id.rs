//! Unique identifiers for coursetrack entities.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a Course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(Ulid);

impl CourseId {
    /// Generate a new CourseId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for CourseId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a Learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LearnerId(Ulid);

impl LearnerId {
    /// Generate a new LearnerId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for LearnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LearnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for LearnerId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Storage key for one (course, learner) progress record.
///
/// The rendered form is deterministic: the same pair always maps to the same
/// persisted blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressKey {
    /// Course the record belongs to
    pub course: CourseId,
    /// Learner the record belongs to
    pub learner: LearnerId,
}

impl ProgressKey {
    /// Build the key for a (course, learner) pair.
    pub fn new(course: CourseId, learner: LearnerId) -> Self {
        Self { course, learner }
    }
}

impl std::fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "courseProgress_{}_{}", self.course, self.learner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_key_is_deterministic() {
        let course = CourseId::new();
        let learner = LearnerId::new();
        let a = ProgressKey::new(course, learner);
        let b = ProgressKey::new(course, learner);
        assert_eq!(a.to_string(), b.to_string());
        assert!(a.to_string().starts_with("courseProgress_"));
    }

    #[test]
    fn ids_round_trip_through_strings() {
        let id = CourseId::new();
        let parsed: CourseId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
