//! Savings goal domain models.

use chrono::{DateTime, NaiveDate, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Savings goal categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SavingsCategory {
    Emergency,
    Vacation,
    House,
    Car,
    Education,
    Wedding,
    Retirement,
    #[default]
    Other,
}

/// Domain model representing a savings goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub category: SavingsCategory,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Percentage of the target reached, clamped to 100. Zero-target goals
    /// report zero progress.
    pub fn progress_percentage(&self) -> Decimal {
        if self.target_amount.is_zero() {
            return Decimal::zero();
        }
        let progress = self.current_amount / self.target_amount * dec!(100);
        progress.min(dec!(100))
    }
}

/// Input model for creating a new savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub category: SavingsCategory,
    pub notes: Option<String>,
}

impl NewSavingsGoal {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.target_amount < Decimal::zero() || self.current_amount < Decimal::zero() {
            return Err(ValidationError::InvalidInput(
                "savings amounts cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for an existing goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalUpdate {
    pub name: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub target_date: Option<NaiveDate>,
    pub category: Option<SavingsCategory>,
    pub notes: Option<String>,
}

/// Partial aggregate over a user's active savings goals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SavingsSums {
    /// Sum of target amounts.
    pub target: Decimal,
    /// Sum of amounts saved so far.
    pub current: Decimal,
}
