use super::model::{RowExport, get_headers};
use csv::Writer;

/// Write the report rows as CSV.
pub fn write_csv(path: &str, rows: &[RowExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(&[
            row.person_id.to_string(),
            row.name.clone(),
            row.title.clone(),
            row.sessions.to_string(),
            row.rate.clone(),
            row.total.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
