//! Prompt construction for the AI coaching flows.
//!
//! Only the request side lives here: structured input in, prompt text out.
//! Sending the prompt to a hosted model and reading the free-text answer is
//! the caller's business.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::exercises::{get_exercise, FitnessLevel};
use crate::workouts::{NewWorkoutRecord, UNKNOWN_EXERCISE_NAME};

/// Input of the personalized feedback flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    /// Text rendering of the workout, see [`format_workout_log`].
    pub workout_log: String,
    pub fitness_goals: String,
    pub level: FitnessLevel,
}

/// A workout as entered in the log form, plus what the coach needs to know.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutFeedbackInput {
    pub workout: NewWorkoutRecord,
    pub fitness_goals: String,
    pub level: FitnessLevel,
}

/// Input of the workout plan generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanRequest {
    pub fitness_goal: String,
    pub fitness_level: FitnessLevel,
    pub equipment_available: String,
    /// e.g. "45 minutes"
    pub preferred_duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoachingPrompt {
    pub name: String,
    pub prompt: String,
}

impl FeedbackRequest {
    pub fn validate(&self) -> Result<()> {
        if self.workout_log.trim().is_empty() {
            return Err(ValidationError::MissingField("workoutLog".to_string()).into());
        }
        require_min_len("fitnessGoals", &self.fitness_goals, 3)
    }

    pub fn feedback_prompt(&self) -> Result<CoachingPrompt> {
        self.validate()?;
        Ok(CoachingPrompt {
            name: "personalizedFeedbackPrompt".to_string(),
            prompt: format!(
                "You are an AI SuperCoach, providing personalized feedback on workouts.\n\n\
                 Analyze the workout log, RPE, exercises, and user notes, and provide concrete \
                 advice for future workouts, always considering the fitness goals and level of the user.\n\n\
                 Fitness Goals: {}\n\
                 Fitness Level: {}\n\
                 Workout Log: {}\n\n\
                 Provide the feedback in a concise and actionable manner.\n",
                self.fitness_goals.trim(),
                self.level,
                self.workout_log
            ),
        })
    }
}

impl WorkoutFeedbackInput {
    pub fn into_request(self) -> Result<FeedbackRequest> {
        if self.workout.exercises.is_empty() {
            return Err(
                ValidationError::InvalidInput("Please log at least one exercise.".to_string())
                    .into(),
            );
        }
        Ok(FeedbackRequest {
            workout_log: format_workout_log(&self.workout),
            fitness_goals: self.fitness_goals,
            level: self.level,
        })
    }
}

impl WorkoutPlanRequest {
    pub fn validate(&self) -> Result<()> {
        require_min_len("fitnessGoal", &self.fitness_goal, 3)?;
        require_min_len("equipmentAvailable", &self.equipment_available, 1)?;
        require_min_len("preferredDuration", &self.preferred_duration, 1)
    }

    pub fn workout_plan_prompt(&self) -> Result<CoachingPrompt> {
        self.validate()?;
        Ok(CoachingPrompt {
            name: "workoutPlanPrompt".to_string(),
            prompt: format!(
                "You are a personal trainer. Generate a workout plan based on the user's fitness \
                 goal, fitness level, available equipment, and preferred duration.\n\n\
                 Fitness Goal: {}\n\
                 Fitness Level: {}\n\
                 Equipment Available: {}\n\
                 Preferred Duration: {}\n\n\
                 Workout Plan:",
                self.fitness_goal.trim(),
                self.fitness_level,
                self.equipment_available.trim(),
                self.preferred_duration.trim()
            ),
        })
    }
}

fn require_min_len(field: &str, value: &str, min: usize) -> Result<()> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::InvalidInput(format!(
            "Field '{}' needs at least {} character(s)",
            field, min
        ))
        .into());
    }
    Ok(())
}

fn optional_number(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Plain-text rendering of a workout for the feedback prompt.
pub fn format_workout_log(workout: &NewWorkoutRecord) -> String {
    let exercises = workout
        .exercises
        .iter()
        .map(|entry| {
            let name = match get_exercise(&entry.exercise_id) {
                Some(exercise) => exercise.name.as_str(),
                None if !entry.exercise_name.trim().is_empty() => entry.exercise_name.as_str(),
                None => UNKNOWN_EXERCISE_NAME,
            };
            let sets = entry
                .sets
                .iter()
                .enumerate()
                .map(|(i, set)| {
                    let mut line = format!("  Set {}: {} reps", i + 1, set.reps);
                    if let Some(weight) = set.weight.filter(|w| *w != 0.0) {
                        line.push_str(&format!(" at {}kg", weight));
                    }
                    if let Some(rpe) = set.rpe {
                        line.push_str(&format!(", RPE {}", rpe));
                    }
                    line
                })
                .collect::<Vec<_>>()
                .join("\n");
            let notes = entry
                .notes
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .map(|n| format!("\n  Notes: {}", n))
                .unwrap_or_default();
            format!("{}:\n{}{}", name, sets, notes)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let duration = workout
        .duration_minutes
        .map_or_else(|| "N/A".to_string(), |m| format!("{} min", m));
    let notes = workout
        .notes
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("None");

    format!(
        "Date: {}\nDuration: {}\nOverall RPE: {}\n\nExercises:\n{}\n\nOverall Notes: {}",
        workout.date,
        duration,
        optional_number(workout.overall_effort),
        exercises,
        notes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::{ExerciseLogEntry, SetLog};

    fn leg_day() -> NewWorkoutRecord {
        NewWorkoutRecord {
            id: None,
            date: "2024-05-01".to_string(),
            exercises: vec![
                ExerciseLogEntry {
                    exercise_id: "2".to_string(),
                    exercise_name: String::new(),
                    sets: vec![
                        SetLog {
                            reps: 5,
                            weight: Some(100.0),
                            rpe: Some(8.0),
                        },
                        SetLog {
                            reps: 5,
                            weight: Some(102.5),
                            rpe: None,
                        },
                    ],
                    notes: Some("Felt strong".to_string()),
                },
                ExerciseLogEntry {
                    exercise_id: "x".to_string(),
                    exercise_name: String::new(),
                    sets: vec![SetLog {
                        reps: 12,
                        weight: Some(0.0),
                        rpe: None,
                    }],
                    notes: None,
                },
            ],
            overall_effort: Some(7.0),
            duration_minutes: None,
            notes: None,
        }
    }

    #[test]
    fn renders_workout_log_text() {
        let text = format_workout_log(&leg_day());
        assert_eq!(
            text,
            "Date: 2024-05-01\nDuration: N/A\nOverall RPE: 7\n\nExercises:\n\
             Squat:\n  Set 1: 5 reps at 100kg, RPE 8\n  Set 2: 5 reps at 102.5kg\n  Notes: Felt strong\n\n\
             Unknown Exercise:\n  Set 1: 12 reps\n\nOverall Notes: None"
        );
    }

    #[test]
    fn feedback_prompt_embeds_goals_level_and_log() {
        let request = WorkoutFeedbackInput {
            workout: leg_day(),
            fitness_goals: "Build leg strength".to_string(),
            level: FitnessLevel::Intermediate,
        }
        .into_request()
        .unwrap();
        let prompt = request.feedback_prompt().unwrap();
        assert_eq!(prompt.name, "personalizedFeedbackPrompt");
        assert!(prompt.prompt.contains("Fitness Goals: Build leg strength\n"));
        assert!(prompt.prompt.contains("Fitness Level: intermediate\n"));
        assert!(prompt.prompt.contains("Workout Log: Date: 2024-05-01"));
    }

    #[test]
    fn prompts_validate_their_input() {
        let short_goal = FeedbackRequest {
            workout_log: "Date: 2024-05-01".to_string(),
            fitness_goals: "ab".to_string(),
            level: FitnessLevel::Beginner,
        };
        assert!(short_goal.feedback_prompt().is_err());

        let plan = WorkoutPlanRequest {
            fitness_goal: "lose weight".to_string(),
            fitness_level: FitnessLevel::Beginner,
            equipment_available: "bodyweight only".to_string(),
            preferred_duration: "30 minutes".to_string(),
        };
        let prompt = plan.workout_plan_prompt().unwrap();
        assert!(prompt.prompt.ends_with("Preferred Duration: 30 minutes\n\nWorkout Plan:"));

        let no_equipment = WorkoutPlanRequest {
            equipment_available: " ".to_string(),
            ..plan
        };
        assert!(no_equipment.workout_plan_prompt().is_err());
    }
}
