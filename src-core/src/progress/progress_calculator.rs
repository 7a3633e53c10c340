//! Progress aggregation.
//!
//! Pure functions from workout and goal records to chart-ready figures. The
//! reference date is always passed in; nothing here reads the clock. Records
//! with unparseable dates are left out of the date-dependent figures and
//! counted instead of failing the computation.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::{debug, warn};

use crate::errors::{Error, Result};
use crate::goals::{GoalMetricKind, GoalRecord};
use crate::progress::progress_model::{
    GoalStatus, GoalStatusBreakdown, MonthlyWorkoutCount, ProgressSummary, SkippedRecords,
    WeightPoint, WeightTrend, MAX_MONTHS_BACK,
};
use crate::utils::dates::{format_day, months_before, parse_timestamp, short_month_label};
use crate::workouts::WorkoutRecord;

pub fn total_workouts(records: &[WorkoutRecord]) -> usize {
    records.len()
}

/// Parseable workout days, one entry per record, plus the number of records skipped.
fn workout_days(records: &[WorkoutRecord]) -> (Vec<NaiveDate>, usize) {
    let mut days = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for record in records {
        match record.workout_day() {
            Some(day) => days.push(day),
            None => {
                debug!(
                    "Skipping workout {} with unparseable date '{}'",
                    record.id, record.date
                );
                skipped += 1;
            }
        }
    }
    (days, skipped)
}

/// Workouts per calendar month for the `months_back` months ending at
/// `reference_date`'s month, oldest first.
///
/// Always returns exactly `months_back` buckets. Buckets are keyed by year
/// and month, so a record from the same month name a year earlier is not
/// counted. Records after the reference month are dropped.
pub fn monthly_frequency(
    records: &[WorkoutRecord],
    reference_date: NaiveDate,
    months_back: u32,
) -> Result<Vec<MonthlyWorkoutCount>> {
    if months_back == 0 || months_back > MAX_MONTHS_BACK {
        return Err(Error::invalid_input(format!(
            "monthsBack must be between 1 and {}, got {}",
            MAX_MONTHS_BACK, months_back
        )));
    }

    let mut buckets = Vec::with_capacity(months_back as usize);
    for offset in (0..months_back).rev() {
        let month_start = months_before(reference_date, offset).ok_or_else(|| {
            Error::invalid_input(format!(
                "monthsBack {} reaches past the supported calendar range",
                months_back
            ))
        })?;
        buckets.push(MonthlyWorkoutCount {
            month: short_month_label(month_start),
            month_start,
            workouts: 0,
        });
    }

    let window_start = buckets[0].month_start;
    let index: HashMap<(i32, u32), usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, b)| ((b.month_start.year(), b.month_start.month()), i))
        .collect();

    let (days, _) = workout_days(records);
    for day in days {
        if day < window_start {
            continue;
        }
        if let Some(&i) = index.get(&(day.year(), day.month())) {
            buckets[i].workouts += 1;
        }
    }

    Ok(buckets)
}

/// Longest run of consecutive workout days. Several workouts on one day
/// count once.
pub fn longest_streak(records: &[WorkoutRecord]) -> u32 {
    let (days, _) = workout_days(records);
    let distinct: BTreeSet<NaiveDate> = days.into_iter().collect();

    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;
    for day in distinct {
        current = match previous {
            Some(prev) if (day - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(day);
    }
    longest
}

/// Status of a single goal. The achieved flag wins over the numbers.
pub fn classify_goal(goal: &GoalRecord) -> GoalStatus {
    let current = goal.current_value_or_zero();
    if goal.is_achieved {
        GoalStatus::Completed
    } else if current > 0.0 && current < goal.target_value {
        GoalStatus::InProgress
    } else {
        GoalStatus::Pending
    }
}

pub fn goal_status_breakdown(goals: &[GoalRecord]) -> GoalStatusBreakdown {
    goals
        .iter()
        .fold(GoalStatusBreakdown::default(), |mut breakdown, goal| {
            match classify_goal(goal) {
                GoalStatus::Completed => breakdown.completed += 1,
                GoalStatus::InProgress => breakdown.in_progress += 1,
                GoalStatus::Pending => breakdown.pending += 1,
            }
            breakdown
        })
}

/// Weight goals with a numeric current value and a creation time, oldest first.
pub fn weight_trend(goals: &[GoalRecord]) -> WeightTrend {
    let mut skipped = 0;
    let mut dated: Vec<(DateTime<Utc>, f64)> = Vec::new();

    for goal in goals
        .iter()
        .filter(|g| g.metric_kind == GoalMetricKind::Weight)
    {
        let Some(raw) = goal.created_at.as_deref() else {
            continue;
        };
        // A malformed creation time counts as skipped whether or not a value is set.
        let created_at = match parse_timestamp(raw) {
            Ok(created_at) => created_at,
            Err(e) => {
                debug!("Skipping weight goal {}: {}", goal.id, e);
                skipped += 1;
                continue;
            }
        };
        if let Some(weight) = goal.current_value.filter(|v| v.is_finite()) {
            dated.push((created_at, weight));
        }
    }

    // Stable, so goals created at the same instant keep their input order.
    dated.sort_by_key(|(created_at, _)| *created_at);

    WeightTrend {
        points: dated
            .into_iter()
            .map(|(created_at, weight)| WeightPoint {
                date: format_day(created_at.date_naive()),
                weight,
            })
            .collect(),
        skipped,
    }
}

fn month_over_month_percent(buckets: &[MonthlyWorkoutCount]) -> Option<f64> {
    match buckets {
        [.., previous, last] if previous.workouts > 0 => {
            let previous = previous.workouts as f64;
            Some((last.workouts as f64 - previous) / previous * 100.0)
        }
        _ => None,
    }
}

/// All dashboard figures in one pass over freshly loaded records.
pub fn summarize(
    workouts: &[WorkoutRecord],
    goals: &[GoalRecord],
    reference_date: NaiveDate,
    months_back: u32,
) -> Result<ProgressSummary> {
    let monthly = monthly_frequency(workouts, reference_date, months_back)?;
    let goal_status = goal_status_breakdown(goals);
    let trend = weight_trend(goals);
    let (_, skipped_workouts) = workout_days(workouts);

    let skipped = SkippedRecords {
        workouts: skipped_workouts,
        goals: trend.skipped,
    };
    if skipped.total() > 0 {
        warn!(
            "Progress summary for {} left out {} workout(s) and {} goal(s) with malformed dates",
            reference_date, skipped.workouts, skipped.goals
        );
    }

    Ok(ProgressSummary {
        reference_date,
        total_workouts: total_workouts(workouts),
        longest_streak: longest_streak(workouts),
        workout_change_percent: month_over_month_percent(&monthly),
        monthly_frequency: monthly,
        goal_status_slices: goal_status.slices(),
        goals_achieved: goals.iter().filter(|g| g.is_achieved).count(),
        goals_total: goals.len(),
        goal_status,
        weight_trend_sufficient: trend.is_sufficient(),
        current_weight: trend.current_weight(),
        weight_change: trend.weight_change(),
        weight_trend: trend.points,
        skipped,
    })
}
