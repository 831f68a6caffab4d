use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use finpulse_core::emis::{Emi, EmiRepositoryTrait, EmiSums, NewEmi};
use finpulse_core::errors::{Result, StoreError};

/// In-memory EMI store; rows grouped per owning user.
#[derive(Default)]
pub struct InMemoryEmiRepository {
    rows: DashMap<String, Vec<Emi>>,
}

impl InMemoryEmiRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmiRepositoryTrait for InMemoryEmiRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<Emi>> {
        Ok(self
            .rows
            .get(user_id)
            .map(|rows| rows.iter().filter(|e| e.is_active).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(&self, user_id: &str, new_emi: NewEmi) -> Result<Emi> {
        let emi = Emi {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            loan_type: new_emi.loan_type,
            amount: new_emi.amount,
            interest_rate: new_emi.interest_rate,
            tenure: new_emi.tenure,
            start_date: new_emi.start_date,
            monthly_payment: new_emi.monthly_payment(),
            is_active: true,
            created_at: Utc::now(),
        };
        self.rows
            .entry(user_id.to_string())
            .or_default()
            .push(emi.clone());
        Ok(emi)
    }

    async fn deactivate(&self, user_id: &str, emi_id: &str) -> Result<Emi> {
        let mut rows = self
            .rows
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("emi {}", emi_id)))?;
        let emi = rows
            .iter_mut()
            .find(|e| e.id == emi_id)
            .ok_or_else(|| StoreError::NotFound(format!("emi {}", emi_id)))?;
        emi.is_active = false;
        Ok(emi.clone())
    }

    async fn sum_active(&self, user_id: &str) -> Result<EmiSums> {
        let mut sums = EmiSums::default();
        if let Some(rows) = self.rows.get(user_id) {
            for emi in rows.iter().filter(|e| e.is_active) {
                sums.amount += emi.amount;
                sums.monthly_payment += emi.monthly_payment;
            }
        }
        Ok(sums)
    }
}
