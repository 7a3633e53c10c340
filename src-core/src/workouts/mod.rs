//! Workouts module - logged workout records, services, and traits.

mod workouts_model;
mod workouts_service;
mod workouts_traits;

pub use workouts_model::{ExerciseLogEntry, NewWorkoutRecord, SetLog, WorkoutRecord};
pub use workouts_service::{WorkoutService, UNKNOWN_EXERCISE_NAME};
pub use workouts_traits::{WorkoutRepositoryTrait, WorkoutServiceTrait};
