use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use num_traits::Zero;
use rust_decimal::Decimal;
use uuid::Uuid;

use finpulse_core::debts::{Debt, DebtRepositoryTrait, NewDebt};
use finpulse_core::errors::{Result, StoreError};

/// In-memory debt store; rows grouped per owning user.
#[derive(Default)]
pub struct InMemoryDebtRepository {
    rows: DashMap<String, Vec<Debt>>,
}

impl InMemoryDebtRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DebtRepositoryTrait for InMemoryDebtRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<Debt>> {
        Ok(self
            .rows
            .get(user_id)
            .map(|rows| rows.iter().filter(|d| d.is_active).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(&self, user_id: &str, new_debt: NewDebt) -> Result<Debt> {
        let debt = Debt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            creditor: new_debt.creditor,
            total_amount: new_debt.total_amount,
            remaining_amount: new_debt.remaining_amount,
            interest_rate: new_debt.interest_rate,
            is_active: true,
            created_at: Utc::now(),
        };
        self.rows
            .entry(user_id.to_string())
            .or_default()
            .push(debt.clone());
        Ok(debt)
    }

    async fn deactivate(&self, user_id: &str, debt_id: &str) -> Result<Debt> {
        let mut rows = self
            .rows
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("debt {}", debt_id)))?;
        let debt = rows
            .iter_mut()
            .find(|d| d.id == debt_id)
            .ok_or_else(|| StoreError::NotFound(format!("debt {}", debt_id)))?;
        debt.is_active = false;
        Ok(debt.clone())
    }

    async fn sum_remaining(&self, user_id: &str) -> Result<Decimal> {
        let mut total = Decimal::zero();
        if let Some(rows) = self.rows.get(user_id) {
            for debt in rows.iter().filter(|d| d.is_active) {
                total += debt.remaining_amount;
            }
        }
        Ok(total)
    }
}
