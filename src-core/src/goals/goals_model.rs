//! Goals domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::dates::parse_timestamp;

/// What a goal measures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalMetricKind {
    Weight,
    LiftPr,
    WorkoutFrequency,
    Custom,
}

impl GoalMetricKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "weight" => Some(GoalMetricKind::Weight),
            "lift_pr" => Some(GoalMetricKind::LiftPr),
            "workout_frequency" => Some(GoalMetricKind::WorkoutFrequency),
            "custom" => Some(GoalMetricKind::Custom),
            _ => None,
        }
    }
}

/// Domain model representing a goal
///
/// `is_achieved` is stored as-is and may disagree with the numeric values;
/// readers see both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: String,
    pub description: String,
    #[serde(alias = "targetMetric")]
    pub metric_kind: GoalMetricKind,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    pub is_achieved: bool,
    /// ISO timestamp of creation.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl GoalRecord {
    pub fn current_value_or_zero(&self) -> f64 {
        self.current_value.unwrap_or(0.0)
    }

    /// Numeric comparison only, independent of `is_achieved`.
    pub fn meets_target(&self) -> bool {
        self.current_value_or_zero() >= self.target_value
    }

    /// Completion percentage clamped to 100, 0 for a non-positive target.
    pub fn progress_percent(&self) -> f64 {
        if self.target_value > 0.0 {
            (self.current_value_or_zero() / self.target_value * 100.0).min(100.0)
        } else {
            0.0
        }
    }

    pub fn created_at_timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|raw| parse_timestamp(raw).ok())
    }

    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(
            &self.description,
            self.target_value,
            self.current_value,
            self.created_at.as_deref(),
        )
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub description: String,
    #[serde(alias = "targetMetric")]
    pub metric_kind: GoalMetricKind,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub is_achieved: bool,
    /// Storage stamps the current time when absent.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(
            &self.description,
            self.target_value,
            self.current_value,
            self.created_at.as_deref(),
        )
    }
}

impl From<GoalRecord> for NewGoal {
    fn from(record: GoalRecord) -> Self {
        NewGoal {
            id: Some(record.id),
            description: record.description,
            metric_kind: record.metric_kind,
            target_value: record.target_value,
            current_value: record.current_value,
            unit: record.unit,
            deadline: record.deadline,
            is_achieved: record.is_achieved,
            created_at: record.created_at,
        }
    }
}

fn validate_goal_fields(
    description: &str,
    target_value: f64,
    current_value: Option<f64>,
    created_at: Option<&str>,
) -> Result<()> {
    if description.trim().chars().count() < 3 {
        return Err(ValidationError::InvalidInput("Description is required.".to_string()).into());
    }
    if !target_value.is_finite() || target_value <= 0.0 {
        return Err(ValidationError::InvalidInput(
            "Target value must be positive.".to_string(),
        )
        .into());
    }
    if let Some(current) = current_value {
        if !current.is_finite() {
            return Err(ValidationError::InvalidInput(format!(
                "Current value {} is not a number",
                current
            ))
            .into());
        }
    }
    if let Some(raw) = created_at {
        parse_timestamp(raw)?;
    }
    Ok(())
}
