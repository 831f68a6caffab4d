use async_trait::async_trait;

use crate::errors::Result;
use crate::savings::savings_model::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate, SavingsSums};

/// Repository trait for savings goal storage.
#[async_trait]
pub trait SavingsRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;
    async fn insert(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal>;
    async fn update(
        &self,
        user_id: &str,
        goal_id: &str,
        update: SavingsGoalUpdate,
    ) -> Result<SavingsGoal>;
    async fn deactivate(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal>;

    /// Sums of target and current amounts over active rows; zero sums when
    /// none match.
    async fn sum_active(&self, user_id: &str) -> Result<SavingsSums>;
}

/// Trait for savings goal service operations.
#[async_trait]
pub trait SavingsServiceTrait: Send + Sync {
    async fn get_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;
    async fn create_goal(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal>;
    async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        update: SavingsGoalUpdate,
    ) -> Result<SavingsGoal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal>;
}
