use chrono::{Datelike, NaiveDate, Utc};

/// Returns the first and last day of the calendar month containing `date`,
/// both inclusive. Expense aggregation uses this range, so a row dated the
/// first day of the next month falls outside it.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    (first, last)
}

/// Convenience function for the current calendar month in UTC.
pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    month_bounds(Utc::now().date_naive())
}
