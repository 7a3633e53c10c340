use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty of an exercise, also used as the user's self-reported level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    #[serde(alias = "Beginner")]
    Beginner,
    #[serde(alias = "Intermediate")]
    Intermediate,
    #[serde(alias = "Advanced")]
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in the exercise library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub image_url: Option<String>,
    pub equipment: Vec<String>,
    pub target_muscles: Vec<String>,
    pub difficulty: FitnessLevel,
}

/// Search criteria for the library. Every field is optional and they combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseFilter {
    pub difficulty: Option<FitnessLevel>,
    pub equipment: Option<String>,
    pub muscle: Option<String>,
    /// Case-insensitive substring match on the exercise name.
    #[serde(alias = "q")]
    pub query: Option<String>,
}

impl ExerciseFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        if let Some(level) = self.difficulty {
            if exercise.difficulty != level {
                return false;
            }
        }
        if let Some(equipment) = non_blank(&self.equipment) {
            if !contains_ignore_case(&exercise.equipment, equipment) {
                return false;
            }
        }
        if let Some(muscle) = non_blank(&self.muscle) {
            if !contains_ignore_case(&exercise.target_muscles, muscle) {
                return false;
            }
        }
        if let Some(query) = non_blank(&self.query) {
            if !exercise
                .name
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| v.eq_ignore_ascii_case(needle))
}
