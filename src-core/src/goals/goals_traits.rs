use crate::documents::{GoalDocument, ImportSummary};
use crate::errors::Result;
use crate::goals::goals_model::{GoalRecord, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// All goals, most recently created first.
    fn load_goals(&self) -> Result<Vec<GoalRecord>>;
    fn get_goal(&self, goal_id: &str) -> Result<GoalRecord>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<GoalRecord>;
    async fn update_goal(&self, goal_update: GoalRecord) -> Result<GoalRecord>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<GoalRecord>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<GoalRecord>;
    async fn update_goal(&self, updated_goal_data: GoalRecord) -> Result<GoalRecord>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
    async fn toggle_achieved(&self, goal_id: String) -> Result<GoalRecord>;
    /// Stores documents that pass boundary parsing. `isAchieved` is kept as stored.
    async fn import_goals(&self, documents: Vec<GoalDocument>) -> Result<ImportSummary>;
}
