use crate::errors::{AppError, AppResult};
use crate::models::report::ReportPeriod;
use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a reporting period from `--year` / `--month` flags.
/// A month without a year refers to the current year in `today`.
pub fn resolve_period(
    year: Option<i32>,
    month: Option<u32>,
    today: NaiveDate,
) -> AppResult<ReportPeriod> {
    if let Some(m) = month
        && !(1..=12).contains(&m)
    {
        return Err(AppError::InvalidDate(format!("month {}", m)));
    }

    let year = year.unwrap_or_else(|| today.year());
    Ok(ReportPeriod { year, month })
}
