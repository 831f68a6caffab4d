use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_zero_rate_loan_amortizes_linearly() {
    assert_eq!(monthly_payment(dec!(12000), dec!(0), 12), dec!(1000));
}

#[test]
fn test_annuity_formula_standard_case() {
    // 100000 at 12% annual over 12 months: installment near 8884.88
    let payment = monthly_payment(dec!(100000), dec!(12), 12);
    assert!(payment > dec!(8884) && payment < dec!(8886), "payment {}", payment);
}

#[test]
fn test_installment_exceeds_linear_share_when_rate_positive() {
    let with_interest = monthly_payment(dec!(50000), dec!(9), 24);
    let linear = monthly_payment(dec!(50000), dec!(0), 24);
    assert!(with_interest > linear);
}

#[test]
fn test_new_emi_validation() {
    let emi = NewEmi {
        loan_type: LoanType::Car,
        amount: dec!(0),
        interest_rate: dec!(8),
        tenure: 12,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    };
    assert!(emi.validate().is_err());

    let emi = NewEmi {
        amount: dec!(5000),
        tenure: 0,
        ..emi
    };
    assert!(emi.validate().is_err());

    let emi = NewEmi {
        amount: dec!(5000),
        tenure: 12,
        ..emi
    };
    assert!(emi.validate().is_ok());
}

#[test]
fn test_loan_type_serializes_as_plain_name() {
    let json = serde_json::to_string(&LoanType::Education).unwrap();
    assert_eq!(json, "\"Education\"");
}
