use crate::documents::{ImportSummary, WorkoutDocument};
use crate::errors::Result;
use crate::workouts::workouts_model::{NewWorkoutRecord, WorkoutRecord};
use async_trait::async_trait;

/// Trait for workout repository operations
#[async_trait]
pub trait WorkoutRepositoryTrait: Send + Sync {
    /// All workouts, newest `date` first.
    fn load_workouts(&self) -> Result<Vec<WorkoutRecord>>;
    fn get_workout(&self, workout_id: &str) -> Result<WorkoutRecord>;
    async fn insert_new_workout(&self, new_workout: NewWorkoutRecord) -> Result<WorkoutRecord>;
    async fn delete_workout(&self, workout_id_to_delete: String) -> Result<usize>;
}

/// Trait for workout service operations
#[async_trait]
pub trait WorkoutServiceTrait: Send + Sync {
    fn get_workouts(&self) -> Result<Vec<WorkoutRecord>>;
    fn get_workout(&self, workout_id: &str) -> Result<WorkoutRecord>;
    async fn log_workout(&self, new_workout: NewWorkoutRecord) -> Result<WorkoutRecord>;
    async fn delete_workout(&self, workout_id_to_delete: String) -> Result<usize>;
    /// Stores documents that pass boundary parsing, as-is. Documents that fail
    /// parsing or collide with an existing id are reported as rejected.
    async fn import_workouts(&self, documents: Vec<WorkoutDocument>) -> Result<ImportSummary>;
}
