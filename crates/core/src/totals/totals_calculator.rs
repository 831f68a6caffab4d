use std::sync::Arc;

use chrono::Utc;
use log::debug;

use crate::debts::DebtRepositoryTrait;
use crate::emis::EmiRepositoryTrait;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;
use crate::savings::SavingsRepositoryTrait;
use crate::totals::totals_model::FinancialTotals;
use crate::users::UserRepositoryTrait;
use crate::utils::time_utils;

/// Pure aggregation: queries the four record stores and the user's profile
/// and produces one `FinancialTotals` snapshot.
///
/// A failing store query aborts the whole computation; substituting partial
/// zeros would produce a misleading total.
pub struct TotalsCalculator {
    user_repository: Arc<dyn UserRepositoryTrait>,
    emi_repository: Arc<dyn EmiRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    debt_repository: Arc<dyn DebtRepositoryTrait>,
    savings_repository: Arc<dyn SavingsRepositoryTrait>,
}

impl TotalsCalculator {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        emi_repository: Arc<dyn EmiRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        debt_repository: Arc<dyn DebtRepositoryTrait>,
        savings_repository: Arc<dyn SavingsRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            emi_repository,
            expense_repository,
            debt_repository,
            savings_repository,
        }
    }

    /// Computes a fresh snapshot for `user_id` and persists it onto the
    /// user's profile as the durable mirror.
    pub async fn compute(&self, user_id: &str) -> Result<FinancialTotals> {
        let user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;

        let (first_day, last_day) = time_utils::current_month_bounds();

        // The four partial aggregates are independent; run them concurrently.
        let (emi_sums, expense_total, debt_total, savings_sums) = futures::try_join!(
            self.emi_repository.sum_active(user_id),
            self.expense_repository
                .sum_in_range(user_id, first_day, last_day),
            self.debt_repository.sum_remaining(user_id),
            self.savings_repository.sum_active(user_id),
        )?;

        let monthly_income = user.resolved_monthly_income();
        let total_balance = monthly_income - expense_total - emi_sums.monthly_payment;

        let totals = FinancialTotals {
            total_balance,
            total_savings_goal: savings_sums.target,
            total_savings_current: savings_sums.current,
            total_debt_amount: debt_total,
            total_emi_amount: emi_sums.amount,
            total_emi_monthly_payment: emi_sums.monthly_payment,
            total_expenses: expense_total,
            monthly_income,
            last_calculated: Utc::now(),
        };

        // Always mirror the snapshot to durable storage, whether or not an
        // in-memory cache also holds it.
        self.user_repository.save_totals(user_id, &totals).await?;

        debug!(
            "Computed totals for user {}: balance {}, expenses {}, emi {}",
            user_id, totals.total_balance, totals.total_expenses, totals.total_emi_monthly_payment
        );

        Ok(totals)
    }
}
