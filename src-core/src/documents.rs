//! Parsing of persisted documents into typed records.
//!
//! Stored documents are loosely shaped: numbers may arrive as numeric
//! strings, timestamps as ISO strings or `{ "seconds": .., "nanoseconds": .. }`
//! objects, and optional fields may be missing or `null`. Each document is
//! checked here and either becomes a [`WorkoutRecord`] / [`GoalRecord`] or is
//! rejected with a reason. Date *contents* are not checked: a record whose
//! date string does not parse is kept so it still counts toward totals, and
//! the progress aggregator reports it as skipped.

use chrono::DateTime;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;
use crate::goals::{GoalMetricKind, GoalRecord};
use crate::workouts::{ExerciseLogEntry, WorkoutRecord};

/// A workout as found in storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutDocument {
    pub id: Option<String>,
    pub date: Value,
    pub exercises: Value,
    #[serde(alias = "overallRPE")]
    pub overall_effort: Value,
    pub duration_minutes: Value,
    pub notes: Value,
}

/// A goal as found in storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalDocument {
    pub id: Option<String>,
    pub description: Value,
    #[serde(alias = "metricKind")]
    pub target_metric: Value,
    pub target_value: Value,
    pub current_value: Value,
    pub unit: Value,
    pub deadline: Value,
    pub is_achieved: Value,
    pub created_at: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RejectedDocument {
    pub id: Option<String>,
    pub reason: String,
}

/// Outcome of parsing a batch of documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocuments<T> {
    pub records: Vec<T>,
    pub rejected: Vec<RejectedDocument>,
}

/// Result of importing a batch of documents into storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: usize,
    pub rejected: Vec<RejectedDocument>,
}

impl TryFrom<WorkoutDocument> for WorkoutRecord {
    type Error = ValidationError;

    fn try_from(doc: WorkoutDocument) -> Result<Self, Self::Error> {
        let id = required_id(doc.id)?;
        let date = timestamp_field("date", &doc.date)?
            .ok_or_else(|| ValidationError::MissingField("date".to_string()))?;
        let exercises: Vec<ExerciseLogEntry> = match doc.exercises {
            Value::Null => Vec::new(),
            value => serde_json::from_value(value).map_err(|e| {
                ValidationError::InvalidInput(format!("Field 'exercises' is malformed: {}", e))
            })?,
        };
        let duration_minutes = number_field("durationMinutes", &doc.duration_minutes)?
            .map(|minutes| {
                if minutes < 0.0 || minutes > u32::MAX as f64 {
                    Err(ValidationError::InvalidInput(format!(
                        "Field 'durationMinutes' is out of range: {}",
                        minutes
                    )))
                } else {
                    Ok(minutes.round() as u32)
                }
            })
            .transpose()?;

        Ok(WorkoutRecord {
            id,
            date,
            exercises,
            overall_effort: number_field("overallEffort", &doc.overall_effort)?,
            duration_minutes,
            notes: string_field("notes", &doc.notes)?,
        })
    }
}

impl TryFrom<GoalDocument> for GoalRecord {
    type Error = ValidationError;

    fn try_from(doc: GoalDocument) -> Result<Self, Self::Error> {
        let id = required_id(doc.id)?;
        let description = string_field("description", &doc.description)?
            .ok_or_else(|| ValidationError::MissingField("description".to_string()))?;
        let metric_raw = string_field("targetMetric", &doc.target_metric)?
            .ok_or_else(|| ValidationError::MissingField("targetMetric".to_string()))?;
        let metric_kind = GoalMetricKind::parse(&metric_raw).ok_or_else(|| {
            ValidationError::InvalidInput(format!("Unknown goal metric '{}'", metric_raw))
        })?;
        let target_value = number_field("targetValue", &doc.target_value)?
            .ok_or_else(|| ValidationError::MissingField("targetValue".to_string()))?;
        if target_value <= 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "Field 'targetValue' must be positive, got {}",
                target_value
            )));
        }

        Ok(GoalRecord {
            id,
            description,
            metric_kind,
            target_value,
            current_value: number_field("currentValue", &doc.current_value)?,
            unit: string_field("unit", &doc.unit)?,
            deadline: timestamp_field("deadline", &doc.deadline)?,
            is_achieved: bool_field("isAchieved", &doc.is_achieved)?,
            created_at: timestamp_field("createdAt", &doc.created_at)?,
        })
    }
}

pub fn parse_workout_documents(docs: Vec<WorkoutDocument>) -> ParsedDocuments<WorkoutRecord> {
    parse_all(docs, |doc| doc.id.clone())
}

pub fn parse_goal_documents(docs: Vec<GoalDocument>) -> ParsedDocuments<GoalRecord> {
    parse_all(docs, |doc| doc.id.clone())
}

fn parse_all<D, T>(docs: Vec<D>, id_of: impl Fn(&D) -> Option<String>) -> ParsedDocuments<T>
where
    T: TryFrom<D, Error = ValidationError>,
{
    let mut records = Vec::with_capacity(docs.len());
    let mut rejected = Vec::new();
    for doc in docs {
        let id = id_of(&doc);
        match T::try_from(doc) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Rejected document {:?}: {}", id, e);
                rejected.push(RejectedDocument {
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }
    ParsedDocuments { records, rejected }
}

fn required_id(id: Option<String>) -> Result<String, ValidationError> {
    id.map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ValidationError::MissingField("id".to_string()))
}

fn number_field(field: &str, value: &Value) -> Result<Option<f64>, ValidationError> {
    let number = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => Some(s.trim().parse::<f64>()?),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(ValidationError::InvalidInput(format!(
            "Field '{}' is not a number: {}",
            field, value
        ))),
    }
}

fn string_field(field: &str, value: &Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(ValidationError::InvalidInput(format!(
            "Field '{}' is not a string: {}",
            field, other
        ))),
    }
}

fn bool_field(field: &str, value: &Value) -> Result<bool, ValidationError> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(ValidationError::InvalidInput(format!(
            "Field '{}' is not a boolean: {}",
            field, other
        ))),
    }
}

/// ISO strings pass through untouched; `{seconds, nanoseconds}` objects
/// become RFC 3339 UTC strings.
fn timestamp_field(field: &str, value: &Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64);
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            seconds
                .and_then(|s| DateTime::from_timestamp(s, u32::try_from(nanos).ok()?))
                .map(|ts| Some(ts.to_rfc3339()))
                .ok_or_else(|| {
                    ValidationError::InvalidInput(format!(
                        "Field '{}' is not a valid timestamp object: {}",
                        field, value
                    ))
                })
        }
        other => Err(ValidationError::InvalidInput(format!(
            "Field '{}' is not a date: {}",
            field, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn goal_doc(value: Value) -> GoalDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn coerces_numeric_strings_and_timestamp_objects() {
        let goal = GoalRecord::try_from(goal_doc(json!({
            "id": "g1",
            "description": "Cut to 70kg",
            "targetMetric": "weight",
            "targetValue": "70",
            "currentValue": 74.5,
            "isAchieved": false,
            "createdAt": { "seconds": 1704067200, "nanoseconds": 0 }
        })))
        .unwrap();

        assert_eq!(goal.metric_kind, GoalMetricKind::Weight);
        assert_eq!(goal.target_value, 70.0);
        assert_eq!(goal.current_value, Some(74.5));
        assert_eq!(goal.created_at.as_deref(), Some("2024-01-01T00:00:00+00:00"));
    }

    #[test]
    fn rejects_documents_with_wrong_shapes() {
        let parsed = parse_goal_documents(vec![
            goal_doc(json!({ "id": "ok", "description": "Run", "targetMetric": "custom", "targetValue": 5 })),
            goal_doc(json!({ "id": "bad-metric", "description": "Run", "targetMetric": "steps", "targetValue": 5 })),
            goal_doc(json!({ "id": "bad-target", "description": "Run", "targetMetric": "custom", "targetValue": "five" })),
            goal_doc(json!({ "description": "Run", "targetMetric": "custom", "targetValue": 5 })),
        ]);

        assert_eq!(parsed.records.len(), 1);
        assert!(!parsed.records[0].is_achieved);
        let ids: Vec<_> = parsed.rejected.iter().map(|r| r.id.clone()).collect();
        assert_eq!(
            ids,
            vec![Some("bad-metric".to_string()), Some("bad-target".to_string()), None]
        );
    }

    #[test]
    fn keeps_workouts_with_unparseable_date_strings() {
        let docs: Vec<WorkoutDocument> = serde_json::from_value(json!([
            { "id": "w1", "date": "2024-01-01", "overallRPE": "7", "durationMinutes": 45 },
            { "id": "w2", "date": "sometime" },
            { "id": "w3", "date": 20240101 },
            { "id": "w4" }
        ]))
        .unwrap();

        let parsed = parse_workout_documents(docs);
        let ids: Vec<_> = parsed.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["w1", "w2"]);
        assert_eq!(parsed.records[0].overall_effort, Some(7.0));
        assert_eq!(parsed.records[0].duration_minutes, Some(45));
        assert!(parsed.records[1].workout_day().is_none());
        assert_eq!(parsed.rejected.len(), 2);
    }
}
