use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::errors::{Error, Result};
use crate::goals::{GoalRecord, GoalRepositoryTrait, NewGoal};

use super::new_record_id;

#[derive(Default)]
pub struct InMemoryGoalRepository {
    goals: DashMap<String, GoalRecord>,
}

impl InMemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGoalRepository {
    fn load_goals(&self) -> Result<Vec<GoalRecord>> {
        let mut goals: Vec<GoalRecord> = self.goals.iter().map(|g| g.value().clone()).collect();
        goals.sort_by_cached_key(|g| (Reverse(g.created_at_timestamp()), g.id.clone()));
        Ok(goals)
    }

    fn get_goal(&self, goal_id: &str) -> Result<GoalRecord> {
        self.goals
            .get(goal_id)
            .map(|g| g.value().clone())
            .ok_or_else(|| Error::NotFound(format!("Goal '{}'", goal_id)))
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<GoalRecord> {
        let id = new_record_id(new_goal.id);
        match self.goals.entry(id.clone()) {
            Entry::Occupied(_) => Err(Error::ConstraintViolation(format!(
                "Goal '{}' already exists",
                id
            ))),
            Entry::Vacant(slot) => {
                let record = GoalRecord {
                    id,
                    description: new_goal.description,
                    metric_kind: new_goal.metric_kind,
                    target_value: new_goal.target_value,
                    current_value: new_goal.current_value,
                    unit: new_goal.unit,
                    deadline: new_goal.deadline,
                    is_achieved: new_goal.is_achieved,
                    created_at: Some(
                        new_goal
                            .created_at
                            .unwrap_or_else(|| Utc::now().to_rfc3339()),
                    ),
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn update_goal(&self, goal_update: GoalRecord) -> Result<GoalRecord> {
        match self.goals.get_mut(&goal_update.id) {
            Some(mut existing) => {
                *existing = goal_update.clone();
                Ok(goal_update)
            }
            None => Err(Error::NotFound(format!("Goal '{}'", goal_update.id))),
        }
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.goals
            .remove(&goal_id_to_delete)
            .map(|_| 1)
            .ok_or_else(|| Error::NotFound(format!("Goal '{}'", goal_id_to_delete)))
    }
}
