//! The financial totals snapshot.

use chrono::{DateTime, Duration, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One immutable snapshot of a user's derived financial summaries.
///
/// Produced by a single aggregation run; a fresh snapshot fully replaces the
/// previous one. All currency fields except `total_balance` are non-negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTotals {
    /// `monthly_income - total_expenses - total_emi_monthly_payment`;
    /// may be negative.
    pub total_balance: Decimal,
    pub total_savings_goal: Decimal,
    pub total_savings_current: Decimal,
    pub total_debt_amount: Decimal,
    #[serde(rename = "totalEMIAmount")]
    pub total_emi_amount: Decimal,
    #[serde(rename = "totalEMIMonthlyPayment")]
    pub total_emi_monthly_payment: Decimal,
    /// Sum of active expenses dated within the current calendar month.
    pub total_expenses: Decimal,
    pub monthly_income: Decimal,
    pub last_calculated: DateTime<Utc>,
}

impl FinancialTotals {
    /// Whether this snapshot has outlived the staleness window at `now`.
    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now.signed_duration_since(self.last_calculated) > window
    }

    /// Percentage of the combined savings target reached, clamped to 100.
    pub fn savings_progress(&self) -> Decimal {
        if self.total_savings_goal.is_zero() {
            return Decimal::zero();
        }
        let progress = self.total_savings_current / self.total_savings_goal * dec!(100);
        progress.min(dec!(100))
    }

    /// Coarse health classification shown on the dashboard.
    pub fn financial_health(&self) -> FinancialHealth {
        let balance = self.total_balance;
        let debt = self.total_debt_amount;
        let savings = self.total_savings_current;

        if balance > Decimal::zero() && debt.is_zero() {
            FinancialHealth::Excellent
        } else if balance > Decimal::zero() && debt < savings {
            FinancialHealth::Good
        } else if balance > Decimal::zero() {
            FinancialHealth::Fair
        } else if balance.is_zero() {
            FinancialHealth::Neutral
        } else {
            FinancialHealth::Poor
        }
    }
}

/// Dashboard health levels, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialHealth {
    Excellent,
    Good,
    Fair,
    Neutral,
    Poor,
}
