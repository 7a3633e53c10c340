use crate::documents::{
    parse_workout_documents, ImportSummary, RejectedDocument, WorkoutDocument,
};
use crate::errors::Result;
use crate::exercises::get_exercise;
use crate::workouts::workouts_model::{NewWorkoutRecord, WorkoutRecord};
use crate::workouts::workouts_traits::{WorkoutRepositoryTrait, WorkoutServiceTrait};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

pub const UNKNOWN_EXERCISE_NAME: &str = "Unknown Exercise";

pub struct WorkoutService<T: WorkoutRepositoryTrait> {
    workout_repo: Arc<T>,
}

impl<T: WorkoutRepositoryTrait> WorkoutService<T> {
    pub fn new(workout_repo: Arc<T>) -> Self {
        WorkoutService { workout_repo }
    }
}

/// Replace submitted exercise names with the library's name for known ids.
fn resolve_exercise_names(new_workout: &mut NewWorkoutRecord) {
    for entry in &mut new_workout.exercises {
        entry.exercise_name = match get_exercise(&entry.exercise_id) {
            Some(exercise) => exercise.name.clone(),
            None if entry.exercise_name.trim().is_empty() => UNKNOWN_EXERCISE_NAME.to_string(),
            None => entry.exercise_name.clone(),
        };
    }
}

#[async_trait]
impl<T: WorkoutRepositoryTrait + Send + Sync> WorkoutServiceTrait for WorkoutService<T> {
    fn get_workouts(&self) -> Result<Vec<WorkoutRecord>> {
        self.workout_repo.load_workouts()
    }

    fn get_workout(&self, workout_id: &str) -> Result<WorkoutRecord> {
        self.workout_repo.get_workout(workout_id)
    }

    async fn log_workout(&self, mut new_workout: NewWorkoutRecord) -> Result<WorkoutRecord> {
        new_workout.validate()?;
        resolve_exercise_names(&mut new_workout);
        let record = self.workout_repo.insert_new_workout(new_workout).await?;
        debug!("Logged workout {} on {}", record.id, record.date);
        Ok(record)
    }

    async fn delete_workout(&self, workout_id_to_delete: String) -> Result<usize> {
        self.workout_repo.delete_workout(workout_id_to_delete).await
    }

    async fn import_workouts(&self, documents: Vec<WorkoutDocument>) -> Result<ImportSummary> {
        let parsed = parse_workout_documents(documents);
        let mut rejected = parsed.rejected;
        let mut imported = 0;
        for record in parsed.records {
            let id = record.id.clone();
            match self
                .workout_repo
                .insert_new_workout(NewWorkoutRecord::from(record))
                .await
            {
                Ok(_) => imported += 1,
                Err(e) => {
                    warn!("Skipped workout {} on import: {}", id, e);
                    rejected.push(RejectedDocument {
                        id: Some(id),
                        reason: e.to_string(),
                    });
                }
            }
        }
        info!("Imported {} workouts, rejected {}", imported, rejected.len());
        Ok(ImportSummary { imported, rejected })
    }
}
