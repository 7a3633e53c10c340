//! Progress module - derived statistics over workout and goal records.

pub mod progress_calculator;
mod progress_model;
mod progress_service;

pub use progress_calculator::{
    classify_goal, goal_status_breakdown, longest_streak, monthly_frequency, summarize,
    total_workouts, weight_trend,
};
pub use progress_model::{
    GoalStatus, GoalStatusBreakdown, GoalStatusSlice, MonthlyWorkoutCount, ProgressSummary,
    SkippedRecords, WeightPoint, WeightTrend, DEFAULT_MONTHS_BACK, MAX_MONTHS_BACK,
};
pub use progress_service::{ProgressService, ProgressServiceTrait};
