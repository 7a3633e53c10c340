use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Months shown in the workout frequency chart unless the caller asks otherwise.
pub const DEFAULT_MONTHS_BACK: u32 = 6;
/// Upper bound for a frequency window (100 years).
pub const MAX_MONTHS_BACK: u32 = 1200;

/// Workouts logged in one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyWorkoutCount {
    /// Short month name, e.g. `Jan`
    pub month: String,
    /// First day of the month the bucket covers
    pub month_start: NaiveDate,
    pub workouts: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum GoalStatus {
    Completed,
    InProgress,
    Pending,
}

impl GoalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Completed => "Completed",
            GoalStatus::InProgress => "In Progress",
            GoalStatus::Pending => "Pending",
        }
    }
}

/// Raw per-status goal counts, zeros included
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatusBreakdown {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl GoalStatusBreakdown {
    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.pending
    }

    pub fn count(&self, status: GoalStatus) -> usize {
        match status {
            GoalStatus::Completed => self.completed,
            GoalStatus::InProgress => self.in_progress,
            GoalStatus::Pending => self.pending,
        }
    }

    /// Non-empty buckets in display order, for proportion charts.
    pub fn slices(&self) -> Vec<GoalStatusSlice> {
        [
            GoalStatus::Completed,
            GoalStatus::InProgress,
            GoalStatus::Pending,
        ]
        .into_iter()
        .filter_map(|status| {
            let value = self.count(status);
            (value > 0).then(|| GoalStatusSlice {
                status,
                name: status.label().to_string(),
                value,
            })
        })
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatusSlice {
    pub status: GoalStatus,
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightPoint {
    /// Goal creation day, `YYYY-MM-DD`
    pub date: String,
    pub weight: f64,
}

/// Weight goals plotted by creation time, oldest first.
///
/// Each point is a goal's latest `current_value`, not a historical weigh-in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrend {
    pub points: Vec<WeightPoint>,
    /// Weight goals dropped because `created_at` did not parse
    pub skipped: usize,
}

impl WeightTrend {
    /// A line needs at least two points.
    pub fn is_sufficient(&self) -> bool {
        self.points.len() >= 2
    }

    /// Latest weight, `None` when nothing qualifies.
    pub fn current_weight(&self) -> Option<f64> {
        self.points.last().map(|p| p.weight)
    }

    /// Last point minus the one before it.
    pub fn weight_change(&self) -> Option<f64> {
        match self.points.as_slice() {
            [.., previous, last] => Some(last.weight - previous.weight),
            _ => None,
        }
    }
}

/// Records left out of date-dependent figures because a date failed to parse
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecords {
    pub workouts: usize,
    pub goals: usize,
}

impl SkippedRecords {
    pub fn total(&self) -> usize {
        self.workouts + self.goals
    }
}

/// Everything the progress dashboard shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub reference_date: NaiveDate,
    pub total_workouts: usize,
    pub longest_streak: u32,
    pub monthly_frequency: Vec<MonthlyWorkoutCount>,
    /// Latest month against the one before, in percent. `None` when the earlier month is empty.
    pub workout_change_percent: Option<f64>,
    pub goal_status: GoalStatusBreakdown,
    pub goal_status_slices: Vec<GoalStatusSlice>,
    pub goals_achieved: usize,
    pub goals_total: usize,
    pub weight_trend: Vec<WeightPoint>,
    pub weight_trend_sufficient: bool,
    pub current_weight: Option<f64>,
    pub weight_change: Option<f64>,
    pub skipped: SkippedRecords,
}
