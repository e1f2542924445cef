use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::correlative::format_correlative;
use crate::core::report::build_report;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::date::resolve_period;
use crate::utils::money::{format_cents, parse_amount};
use crate::utils::table::Table;
use crate::utils::time::now_local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { year, month, rate } = cmd {
        let today = now_local(cfg.offset()?).date();
        let period = resolve_period(*year, *month, today)?;

        let rate_cents = match rate {
            Some(s) => parse_amount(s)
                .ok_or_else(|| AppError::Other(format!("invalid rate '{}'", s)))?,
            None => cfg.dieta_rate_cents,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let report = build_report(&mut pool, period, rate_cents)?;

        header(format!("Dieta report {}", report.period_label()));

        if report.is_empty() {
            info(format!(
                "No executed sessions in {}; nothing to report.",
                report.period_label()
            ));
            return Ok(());
        }

        // Narrative line quoted in the official payment request.
        if let (Some(first), Some(last)) = (report.first_correlative, report.last_correlative) {
            println!(
                "{} session(s) took place, numbered {} through {}.",
                report.session_count,
                format_correlative(first),
                format_correlative(last)
            );
        }
        println!(
            "Rate per session: {}\n",
            format_cents(report.rate_cents, &cfg.currency_symbol)
        );

        if report.rows.is_empty() {
            info("No compensable attendance in this period.");
            return Ok(());
        }

        let mut table = Table::new(&["NAME", "TITLE", "SESSIONS", "TOTAL"]);
        let mut grand_total = 0i64;
        for row in &report.rows {
            grand_total += row.total_cents;
            table.add_row(vec![
                row.name.clone(),
                row.title.clone(),
                row.compensable_sessions.to_string(),
                format_cents(row.total_cents, &cfg.currency_symbol),
            ]);
        }
        print!("{}", table.render(cfg.separator()));

        println!(
            "\nTotal dieta: {}",
            format_cents(grand_total, &cfg.currency_symbol)
        );
    }
    Ok(())
}
