use std::sync::Arc;

use async_trait::async_trait;

use super::savings_model::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};
use super::savings_traits::{SavingsRepositoryTrait, SavingsServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, RecordCollection};

/// Service for managing savings goals.
pub struct SavingsService {
    repository: Arc<dyn SavingsRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl SavingsService {
    pub fn new(
        repository: Arc<dyn SavingsRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    fn emit_changed(&self, user_id: &str) {
        self.event_sink.emit(DomainEvent::records_changed(
            user_id,
            RecordCollection::Savings,
        ));
    }
}

#[async_trait]
impl SavingsServiceTrait for SavingsService {
    async fn get_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        self.repository.list(user_id).await
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
        new_goal.validate()?;
        let goal = self.repository.insert(user_id, new_goal).await?;
        self.emit_changed(user_id);
        Ok(goal)
    }

    async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        update: SavingsGoalUpdate,
    ) -> Result<SavingsGoal> {
        let goal = self.repository.update(user_id, goal_id, update).await?;
        self.emit_changed(user_id);
        Ok(goal)
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal> {
        let goal = self.repository.deactivate(user_id, goal_id).await?;
        self.emit_changed(user_id);
        Ok(goal)
    }
}
