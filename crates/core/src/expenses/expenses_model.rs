//! Expense domain models.

use chrono::{DateTime, NaiveDate, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Domain model representing a single logged expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Decimal,
    /// Day the expense was incurred; monthly aggregation keys off this.
    pub date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for logging a new expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount <= Decimal::zero() {
            return Err(ValidationError::InvalidInput(
                "amount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
