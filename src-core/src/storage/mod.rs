//! In-memory record storage.
//!
//! Stands in for the remote document store: concurrent maps keyed by id,
//! read back in full and ordered the way the dashboard expects.

mod goal_repository;
mod workout_repository;

pub use goal_repository::InMemoryGoalRepository;
pub use workout_repository::InMemoryWorkoutRepository;

fn new_record_id(requested: Option<String>) -> String {
    requested
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}
