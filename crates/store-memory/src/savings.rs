use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use finpulse_core::errors::{Result, StoreError};
use finpulse_core::savings::{
    NewSavingsGoal, SavingsGoal, SavingsGoalUpdate, SavingsRepositoryTrait, SavingsSums,
};

/// In-memory savings goal store; rows grouped per owning user.
#[derive(Default)]
pub struct InMemorySavingsRepository {
    rows: DashMap<String, Vec<SavingsGoal>>,
}

impl InMemorySavingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavingsRepositoryTrait for InMemorySavingsRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        Ok(self
            .rows
            .get(user_id)
            .map(|rows| rows.iter().filter(|g| g.is_active).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
        let goal = SavingsGoal {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: new_goal.current_amount,
            target_date: new_goal.target_date,
            category: new_goal.category,
            notes: new_goal.notes,
            is_active: true,
            created_at: Utc::now(),
        };
        self.rows
            .entry(user_id.to_string())
            .or_default()
            .push(goal.clone());
        Ok(goal)
    }

    async fn update(
        &self,
        user_id: &str,
        goal_id: &str,
        update: SavingsGoalUpdate,
    ) -> Result<SavingsGoal> {
        let mut rows = self
            .rows
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("savings goal {}", goal_id)))?;
        let goal = rows
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| StoreError::NotFound(format!("savings goal {}", goal_id)))?;
        if let Some(name) = update.name {
            goal.name = name;
        }
        if let Some(target) = update.target_amount {
            goal.target_amount = target;
        }
        if let Some(current) = update.current_amount {
            goal.current_amount = current;
        }
        if let Some(date) = update.target_date {
            goal.target_date = date;
        }
        if let Some(category) = update.category {
            goal.category = category;
        }
        if let Some(notes) = update.notes {
            goal.notes = Some(notes);
        }
        Ok(goal.clone())
    }

    async fn deactivate(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal> {
        let mut rows = self
            .rows
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("savings goal {}", goal_id)))?;
        let goal = rows
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| StoreError::NotFound(format!("savings goal {}", goal_id)))?;
        goal.is_active = false;
        Ok(goal.clone())
    }

    async fn sum_active(&self, user_id: &str) -> Result<SavingsSums> {
        let mut sums = SavingsSums::default();
        if let Some(rows) = self.rows.get(user_id) {
            for goal in rows.iter().filter(|g| g.is_active) {
                sums.target += goal.target_amount;
                sums.current += goal.current_amount;
            }
        }
        Ok(sums)
    }
}
