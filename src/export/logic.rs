//! Export orchestration: build the dieta report for the requested period
//! and write it in the chosen format.

use super::model::report_to_rows;
use super::{ExportFormat, notify_export_success};
use crate::config::Config;
use crate::core::correlative::format_correlative;
use crate::core::report::build_report;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::report::{DietaReport, ReportPeriod};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn run(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        period: ReportPeriod,
        rate_cents: i64,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                file
            )));
        }

        let dieta: DietaReport = build_report(pool, period, rate_cents)?;
        let rows = report_to_rows(&dieta, &cfg.currency_symbol);

        match format {
            ExportFormat::Csv => {
                super::csv::write_csv(file, &rows)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                super::json::write_json(
                    file,
                    dieta.period_label(),
                    dieta.session_count,
                    dieta.first_correlative.map(format_correlative),
                    dieta.last_correlative.map(format_correlative),
                    &rows,
                )?;
                notify_export_success("JSON", path);
            }
        }

        Ok(())
    }
}
