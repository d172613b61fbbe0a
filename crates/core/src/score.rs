//! Score fields and the per-learner score sheet.

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;

/// The five numeric fields a learner accumulates over a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreField {
    /// Lesson 1 activity score (0-30)
    Lesson1Activity,
    /// Midterm exam score (0-100)
    Midterm,
    /// Lesson 2 activity score (0-30)
    Lesson2Activity,
    /// Final exam score (0-100)
    FinalExam,
    /// Bonus points earned in the mini-game (unbounded above)
    GamePoints,
}

impl ScoreField {
    /// All fields, in sheet order.
    pub const ALL: [ScoreField; 5] = [
        ScoreField::Lesson1Activity,
        ScoreField::Midterm,
        ScoreField::Lesson2Activity,
        ScoreField::FinalExam,
        ScoreField::GamePoints,
    ];

    /// Maximum value a `set` may store in this field. `None` means unbounded
    /// above (bonus points only ever grow).
    pub fn max_value(&self) -> Option<f64> {
        match self {
            ScoreField::Lesson1Activity | ScoreField::Lesson2Activity => Some(30.0),
            ScoreField::Midterm | ScoreField::FinalExam => Some(100.0),
            ScoreField::GamePoints => None,
        }
    }

    /// Wire name of the field, as it appears in the persisted blob.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreField::Lesson1Activity => "lesson1Activity",
            ScoreField::Midterm => "midterm",
            ScoreField::Lesson2Activity => "lesson2Activity",
            ScoreField::FinalExam => "final",
            ScoreField::GamePoints => "gamePoints",
        }
    }
}

impl std::fmt::Display for ScoreField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScoreField {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson1Activity" => Ok(ScoreField::Lesson1Activity),
            "midterm" => Ok(ScoreField::Midterm),
            "lesson2Activity" => Ok(ScoreField::Lesson2Activity),
            "final" => Ok(ScoreField::FinalExam),
            "gamePoints" => Ok(ScoreField::GamePoints),
            other => Err(ProgressError::UnknownField(other.to_string())),
        }
    }
}

/// All score fields for one (course, learner) pair.
///
/// Serialized field names match the persisted record format, so a sheet
/// written by an older client round-trips unchanged. Missing fields default
/// to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSheet {
    /// Lesson 1 activity score
    #[serde(rename = "lesson1Activity")]
    pub lesson1_activity: f64,

    /// Midterm exam score
    pub midterm: f64,

    /// Lesson 2 activity score
    #[serde(rename = "lesson2Activity")]
    pub lesson2_activity: f64,

    /// Final exam score
    #[serde(rename = "final")]
    pub final_exam: f64,

    /// Bonus points from the mini-game
    #[serde(rename = "gamePoints")]
    pub game_points: f64,
}

impl Default for ScoreSheet {
    fn default() -> Self {
        Self {
            lesson1_activity: 0.0,
            midterm: 0.0,
            lesson2_activity: 0.0,
            final_exam: 0.0,
            game_points: 0.0,
        }
    }
}

impl ScoreSheet {
    /// Current value of a field.
    pub fn get(&self, field: ScoreField) -> f64 {
        match field {
            ScoreField::Lesson1Activity => self.lesson1_activity,
            ScoreField::Midterm => self.midterm,
            ScoreField::Lesson2Activity => self.lesson2_activity,
            ScoreField::FinalExam => self.final_exam,
            ScoreField::GamePoints => self.game_points,
        }
    }

    /// Replace a field with a validated value.
    ///
    /// Negative or non-finite values are rejected; values above the field's
    /// maximum clamp to it.
    pub fn set(&mut self, field: ScoreField, value: f64) -> Result<(), ProgressError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ProgressError::ScoreOutOfRange { field, value });
        }
        let value = match field.max_value() {
            Some(max) => value.min(max),
            None => value,
        };
        match field {
            ScoreField::Lesson1Activity => self.lesson1_activity = value,
            ScoreField::Midterm => self.midterm = value,
            ScoreField::Lesson2Activity => self.lesson2_activity = value,
            ScoreField::FinalExam => self.final_exam = value,
            ScoreField::GamePoints => self.game_points = value,
        }
        Ok(())
    }

    /// Whether every field is finite, non-negative, and within its maximum.
    ///
    /// The setters already enforce this; the check exists for sheets
    /// deserialized from storage, which may hold values no setter produced.
    pub fn is_well_formed(&self) -> bool {
        ScoreField::ALL.iter().all(|&field| {
            let value = self.get(field);
            value.is_finite()
                && value >= 0.0
                && field.max_value().map_or(true, |max| value <= max)
        })
    }

    /// Add bonus points on top of the current total. Additive, unlike
    /// [`set`](Self::set), which replaces.
    pub fn add_game_points(&mut self, points: f64) -> Result<(), ProgressError> {
        if !points.is_finite() || points < 0.0 {
            return Err(ProgressError::NegativePoints(points));
        }
        self.game_points += points;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_and_clamps() {
        let mut sheet = ScoreSheet::default();
        sheet.set(ScoreField::Midterm, 10.0).unwrap();
        sheet.set(ScoreField::Midterm, 20.0).unwrap();
        assert_eq!(sheet.midterm, 20.0);

        sheet.set(ScoreField::Lesson1Activity, 45.0).unwrap();
        assert_eq!(sheet.lesson1_activity, 30.0);
    }

    #[test]
    fn set_rejects_negative_and_non_finite() {
        let mut sheet = ScoreSheet::default();
        assert!(sheet.set(ScoreField::Midterm, -1.0).is_err());
        assert!(sheet.set(ScoreField::Midterm, f64::NAN).is_err());
        assert_eq!(sheet.midterm, 0.0);
    }

    #[test]
    fn game_points_accumulate() {
        let mut sheet = ScoreSheet::default();
        sheet.add_game_points(5.0).unwrap();
        sheet.add_game_points(3.0).unwrap();
        assert_eq!(sheet.game_points, 8.0);
        assert!(sheet.add_game_points(-2.0).is_err());
        assert_eq!(sheet.game_points, 8.0);
    }

    #[test]
    fn wire_names_parse_back() {
        for field in ScoreField::ALL {
            let parsed: ScoreField = field.as_str().parse().unwrap();
            assert_eq!(parsed, field);
        }
        assert!("homework".parse::<ScoreField>().is_err());
    }

    #[test]
    fn well_formedness_bounds_every_field() {
        let mut sheet = ScoreSheet::default();
        assert!(sheet.is_well_formed());

        sheet.set(ScoreField::Midterm, 100.0).unwrap();
        sheet.add_game_points(500.0).unwrap();
        assert!(sheet.is_well_formed());

        // Values no setter produces, as a deserialized sheet could hold.
        sheet.midterm = -50.0;
        assert!(!sheet.is_well_formed());
        sheet.midterm = 101.0;
        assert!(!sheet.is_well_formed());
        sheet.midterm = f64::NAN;
        assert!(!sheet.is_well_formed());
        sheet.midterm = 75.0;
        assert!(sheet.is_well_formed());
    }

    #[test]
    fn sheet_serializes_with_wire_names() {
        let mut sheet = ScoreSheet::default();
        sheet.set(ScoreField::FinalExam, 80.0).unwrap();
        let json = serde_json::to_value(sheet).unwrap();
        assert_eq!(json["final"], 80.0);
        assert_eq!(json["lesson1Activity"], 0.0);
    }
}
