use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::progress::progress_calculator::summarize;
use crate::progress::progress_model::ProgressSummary;
use crate::workouts::WorkoutRepositoryTrait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

/// Trait for progress service operations
pub trait ProgressServiceTrait: Send + Sync {
    /// Summary as of `reference_date`, recomputed from a full read of both collections.
    fn get_progress_summary(
        &self,
        reference_date: NaiveDate,
        months_back: u32,
    ) -> Result<ProgressSummary>;
}

pub struct ProgressService<W: WorkoutRepositoryTrait, G: GoalRepositoryTrait> {
    workout_repo: Arc<W>,
    goal_repo: Arc<G>,
}

impl<W: WorkoutRepositoryTrait, G: GoalRepositoryTrait> ProgressService<W, G> {
    pub fn new(workout_repo: Arc<W>, goal_repo: Arc<G>) -> Self {
        ProgressService {
            workout_repo,
            goal_repo,
        }
    }
}

impl<W: WorkoutRepositoryTrait, G: GoalRepositoryTrait> ProgressServiceTrait
    for ProgressService<W, G>
{
    fn get_progress_summary(
        &self,
        reference_date: NaiveDate,
        months_back: u32,
    ) -> Result<ProgressSummary> {
        let workouts = self.workout_repo.load_workouts()?;
        let goals = self.goal_repo.load_goals()?;
        debug!(
            "Summarizing {} workouts and {} goals as of {}",
            workouts.len(),
            goals.len(),
            reference_date
        );
        summarize(&workouts, &goals, reference_date, months_back)
    }
}
