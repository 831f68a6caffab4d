use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::debts::debts_model::{Debt, NewDebt};
use crate::errors::Result;

/// Repository trait for debt storage.
#[async_trait]
pub trait DebtRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<Debt>>;
    async fn insert(&self, user_id: &str, new_debt: NewDebt) -> Result<Debt>;
    async fn deactivate(&self, user_id: &str, debt_id: &str) -> Result<Debt>;

    /// Sum of remaining balances over active rows; zero when none match.
    async fn sum_remaining(&self, user_id: &str) -> Result<Decimal>;
}

/// Trait for debt service operations.
#[async_trait]
pub trait DebtServiceTrait: Send + Sync {
    async fn get_debts(&self, user_id: &str) -> Result<Vec<Debt>>;
    async fn add_debt(&self, user_id: &str, new_debt: NewDebt) -> Result<Debt>;
    async fn delete_debt(&self, user_id: &str, debt_id: &str) -> Result<Debt>;
}
