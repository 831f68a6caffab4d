use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use num_traits::Zero;
use rust_decimal::Decimal;
use uuid::Uuid;

use finpulse_core::errors::{Result, StoreError};
use finpulse_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};

/// In-memory expense store; rows grouped per owning user.
#[derive(Default)]
pub struct InMemoryExpenseRepository {
    rows: DashMap<String, Vec<Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryExpenseRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<Expense>> {
        Ok(self
            .rows
            .get(user_id)
            .map(|rows| rows.iter().filter(|e| e.is_active).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category: new_expense.category,
            description: new_expense.description,
            amount: new_expense.amount,
            date: new_expense.date,
            is_active: true,
            created_at: Utc::now(),
        };
        self.rows
            .entry(user_id.to_string())
            .or_default()
            .push(expense.clone());
        Ok(expense)
    }

    async fn deactivate(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        let mut rows = self
            .rows
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("expense {}", expense_id)))?;
        let expense = rows
            .iter_mut()
            .find(|e| e.id == expense_id)
            .ok_or_else(|| StoreError::NotFound(format!("expense {}", expense_id)))?;
        expense.is_active = false;
        Ok(expense.clone())
    }

    async fn sum_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        let mut total = Decimal::zero();
        if let Some(rows) = self.rows.get(user_id) {
            for expense in rows
                .iter()
                .filter(|e| e.is_active && e.date >= start && e.date <= end)
            {
                total += expense.amount;
            }
        }
        Ok(total)
    }
}
