//! Exercise library - the built-in catalog and its search filters.

mod exercise_library;
mod exercises_model;

pub use exercise_library::{find_exercises, get_exercise, EXERCISE_LIBRARY};
pub use exercises_model::{Exercise, ExerciseFilter, FitnessLevel};
