//! Debt domain models.

use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Domain model representing a tracked debt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub user_id: String,
    /// Who the debt is owed to.
    pub creditor: String,
    pub total_amount: Decimal,
    /// Outstanding balance; this is what totals aggregation sums.
    pub remaining_amount: Decimal,
    pub interest_rate: Option<Decimal>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording a new debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebt {
    pub creditor: String,
    pub total_amount: Decimal,
    pub remaining_amount: Decimal,
    pub interest_rate: Option<Decimal>,
}

impl NewDebt {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.creditor.trim().is_empty() {
            return Err(ValidationError::MissingField("creditor".to_string()));
        }
        if self.total_amount < Decimal::zero() || self.remaining_amount < Decimal::zero() {
            return Err(ValidationError::InvalidInput(
                "debt amounts cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
