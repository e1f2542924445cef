//! Report orchestration: fetch one consistent snapshot, then aggregate.
//!
//! All rows are loaded before any computation starts, so correlatives and
//! payment totals come from a single snapshot even if check-ins happen
//! while the report renders.

use crate::core::pairing::pair_attendance;
use crate::core::payment::aggregate_payments;
use crate::db::pool::DbPool;
use crate::db::queries::{load_attendance_by_year, load_persons, load_sessions_by_year};
use crate::errors::AppResult;
use crate::models::person::Person;
use crate::models::report::{DietaReport, ReportPeriod};
use std::collections::HashMap;

pub fn build_report(
    pool: &mut DbPool,
    period: ReportPeriod,
    rate_cents: i64,
) -> AppResult<DietaReport> {
    // whole year, so annual correlatives stay correct for monthly reports
    let sessions = load_sessions_by_year(&pool.conn, period.year)?;
    let records = load_attendance_by_year(&pool.conn, period.year)?;
    let roster: HashMap<i64, Person> = load_persons(&pool.conn)?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let pairs = pair_attendance(&records);

    Ok(aggregate_payments(
        &sessions, &pairs, &roster, rate_cents, period,
    ))
}
