//! User domain models.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::totals::FinancialTotals;

/// Domain model representing a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub occupation: Option<String>,
    /// Declared monthly salary.
    pub salary: Decimal,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub financial_profile: FinancialProfile,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Resolves the income used for totals aggregation: the profile override
    /// when present and non-zero, else the declared salary.
    pub fn resolved_monthly_income(&self) -> Decimal {
        if !self.financial_profile.monthly_income.is_zero() {
            self.financial_profile.monthly_income
        } else {
            self.salary
        }
    }
}

/// User-editable financial profile.
///
/// The manual fields (`total_expense`, `total_emi`, `total_debt`,
/// `total_savings`) are a separate override store written by the
/// financial-data routes; the aggregator never reads them. `monthly_income`
/// is the one deliberate bridge: it overrides the declared salary during
/// aggregation. `totals` is the durable mirror of the last computed snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub monthly_income: Decimal,
    pub total_expense: Decimal,
    pub total_emi: Decimal,
    pub total_debt: Decimal,
    pub total_savings: Decimal,
    pub totals: Option<FinancialTotals>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Input model for registering a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub occupation: Option<String>,
    pub salary: Decimal,
    pub password_hash: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email".to_string()));
        }
        if self.salary < Decimal::zero() {
            return Err(ValidationError::InvalidInput(
                "salary cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for the profile fields editable from the profile page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub occupation: Option<String>,
    pub salary: Option<Decimal>,
}

/// Partial update for the user-editable financial fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfileUpdate {
    pub monthly_income: Option<Decimal>,
    pub total_expense: Option<Decimal>,
    pub total_emi: Option<Decimal>,
    pub total_debt: Option<Decimal>,
    pub total_savings: Option<Decimal>,
}

/// Name of a single directly patchable financial field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinancialField {
    MonthlyIncome,
    TotalExpense,
    TotalEmi,
    TotalDebt,
    TotalSavings,
}

impl FromStr for FinancialField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthlyIncome" => Ok(Self::MonthlyIncome),
            "totalExpense" => Ok(Self::TotalExpense),
            "totalEMI" | "totalEmi" => Ok(Self::TotalEmi),
            "totalDebt" => Ok(Self::TotalDebt),
            "totalSavings" => Ok(Self::TotalSavings),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown financial field '{}'",
                other
            ))),
        }
    }
}

impl FinancialField {
    /// Expands a single-field patch into a profile update.
    pub fn into_update(self, value: Decimal) -> FinancialProfileUpdate {
        let mut update = FinancialProfileUpdate::default();
        match self {
            Self::MonthlyIncome => update.monthly_income = Some(value),
            Self::TotalExpense => update.total_expense = Some(value),
            Self::TotalEmi => update.total_emi = Some(value),
            Self::TotalDebt => update.total_debt = Some(value),
            Self::TotalSavings => update.total_savings = Some(value),
        }
        update
    }
}
