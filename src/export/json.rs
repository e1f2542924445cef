use super::model::RowExport;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Serialize)]
struct JsonExport<'a> {
    period: String,
    session_count: u32,
    first_correlative: Option<String>,
    last_correlative: Option<String>,
    rows: &'a [RowExport],
}

/// Write the report (rows plus the correlative narrative fields) as JSON.
pub fn write_json(
    path: &str,
    period: String,
    session_count: u32,
    first_correlative: Option<String>,
    last_correlative: Option<String>,
    rows: &[RowExport],
) -> AppResult<()> {
    let doc = JsonExport {
        period,
        session_count,
        first_correlative,
        last_correlative,
        rows,
    };

    let json =
        serde_json::to_string_pretty(&doc).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
