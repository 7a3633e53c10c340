use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::dates::parse_calendar_day;

/// One set of an exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetLog {
    pub reps: u32,
    /// Absent for bodyweight work.
    pub weight: Option<f64>,
    /// Rate of perceived exertion, 1-10.
    pub rpe: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogEntry {
    pub exercise_id: String,
    #[serde(default)]
    pub exercise_name: String,
    pub sets: Vec<SetLog>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Domain model representing a logged workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: String,
    /// ISO date or timestamp as persisted. Only the calendar day matters.
    pub date: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseLogEntry>,
    #[serde(default, alias = "overallRPE")]
    pub overall_effort: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutRecord {
    /// Calendar day of the workout, or `None` when `date` does not parse.
    pub fn workout_day(&self) -> Option<NaiveDate> {
        parse_calendar_day(&self.date).ok()
    }
}

/// Input model for logging a new workout
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutRecord {
    pub id: Option<String>,
    pub date: String,
    pub exercises: Vec<ExerciseLogEntry>,
    #[serde(default, alias = "overallRPE")]
    pub overall_effort: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewWorkoutRecord {
    pub fn validate(&self) -> Result<()> {
        parse_calendar_day(&self.date)?;

        if self.exercises.is_empty() {
            return Err(ValidationError::InvalidInput(
                "Add at least one exercise".to_string(),
            )
            .into());
        }
        for (index, exercise) in self.exercises.iter().enumerate() {
            if exercise.exercise_id.trim().is_empty() {
                return Err(ValidationError::MissingField(format!(
                    "exercises[{}].exerciseId",
                    index
                ))
                .into());
            }
            if exercise.sets.is_empty() {
                return Err(ValidationError::InvalidInput(format!(
                    "Exercise {} needs at least one set",
                    index + 1
                ))
                .into());
            }
            for set in &exercise.sets {
                if let Some(weight) = set.weight {
                    if !weight.is_finite() || weight < 0.0 {
                        return Err(ValidationError::InvalidInput(format!(
                            "Invalid weight {} for exercise {}",
                            weight,
                            index + 1
                        ))
                        .into());
                    }
                }
                check_effort("rpe", set.rpe)?;
            }
        }

        check_effort("overallEffort", self.overall_effort)?;

        if self.duration_minutes == Some(0) {
            return Err(ValidationError::InvalidInput(
                "Duration must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

impl From<WorkoutRecord> for NewWorkoutRecord {
    fn from(record: WorkoutRecord) -> Self {
        NewWorkoutRecord {
            id: Some(record.id),
            date: record.date,
            exercises: record.exercises,
            overall_effort: record.overall_effort,
            duration_minutes: record.duration_minutes,
            notes: record.notes,
        }
    }
}

fn check_effort(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !(1.0..=10.0).contains(&v) => Err(ValidationError::InvalidInput(format!(
            "{} must be between 1 and 10, got {}",
            field, v
        ))
        .into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat_day(date: &str) -> NewWorkoutRecord {
        NewWorkoutRecord {
            id: None,
            date: date.to_string(),
            exercises: vec![ExerciseLogEntry {
                exercise_id: "2".to_string(),
                exercise_name: String::new(),
                sets: vec![SetLog {
                    reps: 5,
                    weight: Some(100.0),
                    rpe: Some(8.0),
                }],
                notes: None,
            }],
            overall_effort: Some(7.0),
            duration_minutes: Some(45),
            notes: None,
        }
    }

    #[test]
    fn accepts_a_complete_log() {
        assert!(squat_day("2024-05-01").validate().is_ok());
    }

    #[test]
    fn rejects_bad_dates_and_empty_logs() {
        assert!(squat_day("05/01/2024").validate().is_err());

        let mut empty = squat_day("2024-05-01");
        empty.exercises.clear();
        assert!(empty.validate().is_err());

        let mut no_sets = squat_day("2024-05-01");
        no_sets.exercises[0].sets.clear();
        assert!(no_sets.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_effort_and_duration() {
        let mut hard = squat_day("2024-05-01");
        hard.overall_effort = Some(11.0);
        assert!(hard.validate().is_err());

        let mut instant = squat_day("2024-05-01");
        instant.duration_minutes = Some(0);
        assert!(instant.validate().is_err());
    }

    #[test]
    fn reads_legacy_rpe_field_name() {
        let record: WorkoutRecord = serde_json::from_str(
            r#"{"id":"w1","date":"2024-05-01","overallRPE":6,"durationMinutes":30}"#,
        )
        .unwrap();
        assert_eq!(record.overall_effort, Some(6.0));
        assert!(record.exercises.is_empty());
        assert!(record.workout_day().is_some());
    }
}
