use std::sync::Arc;

use async_trait::async_trait;

use super::expenses_model::{Expense, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, RecordCollection};

/// Service for managing expense records.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ExpenseService {
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.repository.list(user_id).await
    }

    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        let expense = self.repository.insert(user_id, new_expense).await?;
        self.event_sink.emit(DomainEvent::records_changed(
            user_id,
            RecordCollection::Expense,
        ));
        Ok(expense)
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        let expense = self.repository.deactivate(user_id, expense_id).await?;
        self.event_sink.emit(DomainEvent::records_changed(
            user_id,
            RecordCollection::Expense,
        ));
        Ok(expense)
    }
}
