//! SuperCoach Core - workout and goal records, services, and progress aggregation.
//!
//! Record storage is reached through repository traits; the `storage`
//! module provides in-memory implementations. Progress figures are computed
//! by pure functions in `progress` from freshly loaded records.

pub mod coaching;
pub mod documents;
pub mod errors;
pub mod exercises;
pub mod goals;
pub mod progress;
pub mod storage;
pub mod utils;
pub mod workouts;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
