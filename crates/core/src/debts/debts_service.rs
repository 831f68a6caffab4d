use std::sync::Arc;

use async_trait::async_trait;

use super::debts_model::{Debt, NewDebt};
use super::debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, RecordCollection};

/// Service for managing debt records.
pub struct DebtService {
    repository: Arc<dyn DebtRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl DebtService {
    pub fn new(repository: Arc<dyn DebtRepositoryTrait>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait]
impl DebtServiceTrait for DebtService {
    async fn get_debts(&self, user_id: &str) -> Result<Vec<Debt>> {
        self.repository.list(user_id).await
    }

    async fn add_debt(&self, user_id: &str, new_debt: NewDebt) -> Result<Debt> {
        new_debt.validate()?;
        let debt = self.repository.insert(user_id, new_debt).await?;
        self.event_sink
            .emit(DomainEvent::records_changed(user_id, RecordCollection::Debt));
        Ok(debt)
    }

    async fn delete_debt(&self, user_id: &str, debt_id: &str) -> Result<Debt> {
        let debt = self.repository.deactivate(user_id, debt_id).await?;
        self.event_sink
            .emit(DomainEvent::records_changed(user_id, RecordCollection::Debt));
        Ok(debt)
    }
}
