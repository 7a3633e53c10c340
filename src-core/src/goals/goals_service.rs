use crate::documents::{parse_goal_documents, GoalDocument, ImportSummary, RejectedDocument};
use crate::errors::Result;
use crate::goals::goals_model::{GoalRecord, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

/// Goal CRUD with the achievement policy applied on writes.
///
/// Creating or editing a goal recomputes `is_achieved` from
/// `current >= target`. Toggling flips the flag explicitly; marking a goal
/// achieved raises `current_value` to the target, un-marking leaves the
/// value alone. Reads never touch the flag.
pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait + Send + Sync> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Result<Vec<GoalRecord>> {
        self.goal_repo.load_goals()
    }

    async fn create_goal(&self, mut new_goal: NewGoal) -> Result<GoalRecord> {
        new_goal.validate()?;
        let current = new_goal.current_value.unwrap_or(0.0);
        new_goal.current_value = Some(current);
        new_goal.is_achieved = current >= new_goal.target_value;
        self.goal_repo.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, mut updated_goal_data: GoalRecord) -> Result<GoalRecord> {
        updated_goal_data.validate()?;
        let existing = self.goal_repo.get_goal(&updated_goal_data.id)?;

        // Creation time is owned by storage.
        updated_goal_data.created_at = existing.created_at;
        updated_goal_data.is_achieved = updated_goal_data.meets_target();
        if updated_goal_data.is_achieved != existing.is_achieved {
            debug!(
                "Goal {} achievement changed to {} by edit",
                updated_goal_data.id, updated_goal_data.is_achieved
            );
        }
        self.goal_repo.update_goal(updated_goal_data).await
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.goal_repo.delete_goal(goal_id_to_delete).await
    }

    async fn toggle_achieved(&self, goal_id: String) -> Result<GoalRecord> {
        let mut goal = self.goal_repo.get_goal(&goal_id)?;
        goal.is_achieved = !goal.is_achieved;
        if goal.is_achieved {
            goal.current_value = Some(goal.target_value);
        }
        debug!("Goal {} marked achieved={}", goal.id, goal.is_achieved);
        self.goal_repo.update_goal(goal).await
    }

    async fn import_goals(&self, documents: Vec<GoalDocument>) -> Result<ImportSummary> {
        let parsed = parse_goal_documents(documents);
        let mut rejected = parsed.rejected;
        let mut imported = 0;
        for record in parsed.records {
            let id = record.id.clone();
            match self.goal_repo.insert_new_goal(NewGoal::from(record)).await {
                Ok(_) => imported += 1,
                Err(e) => {
                    warn!("Skipped goal {} on import: {}", id, e);
                    rejected.push(RejectedDocument {
                        id: Some(id),
                        reason: e.to_string(),
                    });
                }
            }
        }
        info!("Imported {} goals, rejected {}", imported, rejected.len());
        Ok(ImportSummary { imported, rejected })
    }
}
