use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};

/// Repository trait for expense storage.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<Expense>>;
    async fn insert(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn deactivate(&self, user_id: &str, expense_id: &str) -> Result<Expense>;

    /// Sum of active expense amounts with `date` in `[start, end]` inclusive.
    /// Returns zero when no rows match.
    async fn sum_in_range(&self, user_id: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Decimal>;
}

/// Trait for expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
}
