use crate::models::report::{CompensationRow, DietaReport};
use crate::utils::format_cents;
use serde::Serialize;

/// Flat row for export output. Money fields are pre-formatted strings so
/// spreadsheet users never see raw centavos.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub person_id: i64,
    pub name: String,
    pub title: String,
    pub sessions: u32,
    pub rate: String,
    pub total: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["person_id", "name", "title", "sessions", "rate", "total"]
}

pub(crate) fn to_export_row(row: &CompensationRow, currency: &str) -> RowExport {
    RowExport {
        person_id: row.person_id,
        name: row.name.clone(),
        title: row.title.clone(),
        sessions: row.compensable_sessions,
        rate: format_cents(row.rate_cents, currency),
        total: format_cents(row.total_cents, currency),
    }
}

pub(crate) fn report_to_rows(report: &DietaReport, currency: &str) -> Vec<RowExport> {
    report.rows.iter().map(|r| to_export_row(r, currency)).collect()
}
