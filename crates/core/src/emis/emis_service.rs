use std::sync::Arc;

use async_trait::async_trait;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::emis_model::{Emi, EmiStats, NewEmi};
use super::emis_traits::{EmiRepositoryTrait, EmiServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, RecordCollection};

/// Service for managing EMI records.
pub struct EmiService {
    repository: Arc<dyn EmiRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl EmiService {
    pub fn new(repository: Arc<dyn EmiRepositoryTrait>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait]
impl EmiServiceTrait for EmiService {
    async fn get_emis(&self, user_id: &str) -> Result<Vec<Emi>> {
        self.repository.list(user_id).await
    }

    async fn add_emi(&self, user_id: &str, new_emi: NewEmi) -> Result<Emi> {
        new_emi.validate()?;
        let emi = self.repository.insert(user_id, new_emi).await?;
        self.event_sink
            .emit(DomainEvent::records_changed(user_id, RecordCollection::Emi));
        Ok(emi)
    }

    async fn delete_emi(&self, user_id: &str, emi_id: &str) -> Result<Emi> {
        let emi = self.repository.deactivate(user_id, emi_id).await?;
        self.event_sink
            .emit(DomainEvent::records_changed(user_id, RecordCollection::Emi));
        Ok(emi)
    }

    async fn get_stats(&self, user_id: &str) -> Result<EmiStats> {
        let emis = self.repository.list(user_id).await?;
        let count = emis.len();
        let total_monthly_payment = emis.iter().map(|e| e.monthly_payment).sum();
        let avg_interest_rate = if count > 0 {
            emis.iter().map(|e| e.interest_rate).sum::<Decimal>() / Decimal::from(count)
        } else {
            Decimal::zero()
        };
        Ok(EmiStats {
            total_emis: count,
            total_monthly_payment,
            avg_interest_rate,
        })
    }
}
