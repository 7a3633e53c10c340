use std::cmp::Reverse;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::errors::{Error, Result};
use crate::utils::dates::parse_timestamp;
use crate::workouts::{NewWorkoutRecord, WorkoutRecord, WorkoutRepositoryTrait};

use super::new_record_id;

#[derive(Default)]
pub struct InMemoryWorkoutRepository {
    workouts: DashMap<String, WorkoutRecord>,
}

impl InMemoryWorkoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkoutRepositoryTrait for InMemoryWorkoutRepository {
    fn load_workouts(&self) -> Result<Vec<WorkoutRecord>> {
        let mut workouts: Vec<WorkoutRecord> =
            self.workouts.iter().map(|w| w.value().clone()).collect();
        // Newest first; unparseable dates sink to the end.
        workouts.sort_by_cached_key(|w| {
            (
                Reverse(parse_timestamp(&w.date).ok()),
                w.id.clone(),
            )
        });
        Ok(workouts)
    }

    fn get_workout(&self, workout_id: &str) -> Result<WorkoutRecord> {
        self.workouts
            .get(workout_id)
            .map(|w| w.value().clone())
            .ok_or_else(|| Error::NotFound(format!("Workout '{}'", workout_id)))
    }

    async fn insert_new_workout(&self, new_workout: NewWorkoutRecord) -> Result<WorkoutRecord> {
        let id = new_record_id(new_workout.id);
        match self.workouts.entry(id.clone()) {
            Entry::Occupied(_) => Err(Error::ConstraintViolation(format!(
                "Workout '{}' already exists",
                id
            ))),
            Entry::Vacant(slot) => {
                let record = WorkoutRecord {
                    id,
                    date: new_workout.date,
                    exercises: new_workout.exercises,
                    overall_effort: new_workout.overall_effort,
                    duration_minutes: new_workout.duration_minutes,
                    notes: new_workout.notes,
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn delete_workout(&self, workout_id_to_delete: String) -> Result<usize> {
        self.workouts
            .remove(&workout_id_to_delete)
            .map(|_| 1)
            .ok_or_else(|| Error::NotFound(format!("Workout '{}'", workout_id_to_delete)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_workout(id: Option<&str>, date: &str) -> NewWorkoutRecord {
        NewWorkoutRecord {
            id: id.map(str::to_string),
            date: date.to_string(),
            exercises: Vec::new(),
            overall_effort: None,
            duration_minutes: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn loads_newest_first_with_bad_dates_last() {
        let repo = InMemoryWorkoutRepository::new();
        repo.insert_new_workout(new_workout(Some("a"), "2024-01-01"))
            .await
            .unwrap();
        repo.insert_new_workout(new_workout(Some("b"), "garbage"))
            .await
            .unwrap();
        repo.insert_new_workout(new_workout(Some("c"), "2024-03-01T10:00:00Z"))
            .await
            .unwrap();

        let ids: Vec<_> = repo
            .load_workouts()
            .unwrap()
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn assigns_ids_and_rejects_duplicates() {
        let repo = InMemoryWorkoutRepository::new();
        let generated = repo
            .insert_new_workout(new_workout(None, "2024-01-01"))
            .await
            .unwrap();
        assert!(uuid::Uuid::parse_str(&generated.id).is_ok());

        repo.insert_new_workout(new_workout(Some("dup"), "2024-01-01"))
            .await
            .unwrap();
        assert!(matches!(
            repo.insert_new_workout(new_workout(Some("dup"), "2024-01-02"))
                .await,
            Err(Error::ConstraintViolation(_))
        ));

        assert_eq!(repo.delete_workout("dup".to_string()).await.unwrap(), 1);
        assert!(matches!(
            repo.delete_workout("dup".to_string()).await,
            Err(Error::NotFound(_))
        ));
    }
}
