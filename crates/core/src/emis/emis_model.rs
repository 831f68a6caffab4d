//! EMI domain models.

use chrono::{DateTime, NaiveDate, Utc};
use num_traits::Zero;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Loan categories recognized by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    Car,
    Home,
    Education,
    Personal,
    Business,
    Other,
}

/// Domain model representing one loan with equated monthly installments.
///
/// `monthly_payment` is derived from the principal, rate, and tenure at
/// creation time and stored with the row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Emi {
    pub id: String,
    pub user_id: String,
    pub loan_type: LoanType,
    /// Principal amount of the loan.
    pub amount: Decimal,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    /// Tenure in months.
    pub tenure: u32,
    pub start_date: NaiveDate,
    pub monthly_payment: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new EMI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmi {
    pub loan_type: LoanType,
    pub amount: Decimal,
    pub interest_rate: Decimal,
    pub tenure: u32,
    pub start_date: NaiveDate,
}

impl NewEmi {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount <= Decimal::zero() {
            return Err(ValidationError::InvalidInput(
                "amount must be positive".to_string(),
            ));
        }
        if self.interest_rate < Decimal::zero() || self.interest_rate > dec!(100) {
            return Err(ValidationError::InvalidInput(
                "interest rate must be between 0 and 100".to_string(),
            ));
        }
        if self.tenure == 0 {
            return Err(ValidationError::InvalidInput(
                "tenure must be at least one month".to_string(),
            ));
        }
        Ok(())
    }

    /// The installment this loan amortizes to.
    pub fn monthly_payment(&self) -> Decimal {
        monthly_payment(self.amount, self.interest_rate, self.tenure)
    }
}

/// Standard annuity formula: `P·r·(1+r)^n / ((1+r)^n − 1)` with the monthly
/// rate `r = annual / 100 / 12`. Zero-rate loans amortize linearly.
pub fn monthly_payment(principal: Decimal, annual_rate: Decimal, tenure_months: u32) -> Decimal {
    let months = Decimal::from(tenure_months);
    let rate = annual_rate / dec!(100) / dec!(12);
    if rate.is_zero() {
        return principal / months;
    }
    let factor = (Decimal::ONE + rate).powi(tenure_months as i64);
    principal * rate * factor / (factor - Decimal::ONE)
}

/// Partial aggregate over a user's active EMI rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmiSums {
    /// Sum of principal amounts.
    pub amount: Decimal,
    /// Sum of computed installments.
    pub monthly_payment: Decimal,
}

/// Summary statistics over a user's active EMIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiStats {
    #[serde(rename = "totalEMIs")]
    pub total_emis: usize,
    pub total_monthly_payment: Decimal,
    pub avg_interest_rate: Decimal,
}
