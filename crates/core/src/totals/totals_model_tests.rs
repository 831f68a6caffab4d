use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn sample(balance: Decimal, debt: Decimal, savings_current: Decimal) -> FinancialTotals {
    FinancialTotals {
        total_balance: balance,
        total_savings_goal: dec!(10000),
        total_savings_current: savings_current,
        total_debt_amount: debt,
        total_emi_amount: dec!(0),
        total_emi_monthly_payment: dec!(0),
        total_expenses: dec!(0),
        monthly_income: dec!(0),
        last_calculated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_snapshot_exactly_at_window_edge_is_fresh() {
    let totals = sample(dec!(0), dec!(0), dec!(0));
    let window = Duration::minutes(5);
    let at_edge = totals.last_calculated + window;
    assert!(!totals.is_stale(at_edge, window));
    assert!(totals.is_stale(at_edge + Duration::seconds(1), window));
}

#[test]
fn test_savings_progress_clamps_at_hundred() {
    let mut totals = sample(dec!(0), dec!(0), dec!(15000));
    assert_eq!(totals.savings_progress(), dec!(100));
    totals.total_savings_current = dec!(2500);
    assert_eq!(totals.savings_progress(), dec!(25));
    totals.total_savings_goal = dec!(0);
    assert_eq!(totals.savings_progress(), dec!(0));
}

#[test]
fn test_financial_health_classification() {
    assert_eq!(
        sample(dec!(100), dec!(0), dec!(0)).financial_health(),
        FinancialHealth::Excellent
    );
    assert_eq!(
        sample(dec!(100), dec!(50), dec!(200)).financial_health(),
        FinancialHealth::Good
    );
    assert_eq!(
        sample(dec!(100), dec!(500), dec!(200)).financial_health(),
        FinancialHealth::Fair
    );
    assert_eq!(
        sample(dec!(0), dec!(500), dec!(0)).financial_health(),
        FinancialHealth::Neutral
    );
    assert_eq!(
        sample(dec!(-10), dec!(0), dec!(0)).financial_health(),
        FinancialHealth::Poor
    );
}

#[test]
fn test_snapshot_wire_field_names() {
    let json = serde_json::to_value(sample(dec!(0), dec!(0), dec!(0))).unwrap();
    let object = json.as_object().unwrap();
    assert!(object.contains_key("totalBalance"));
    assert!(object.contains_key("totalEMIAmount"));
    assert!(object.contains_key("totalEMIMonthlyPayment"));
    assert!(object.contains_key("totalSavingsGoal"));
    assert!(object.contains_key("lastCalculated"));
}
