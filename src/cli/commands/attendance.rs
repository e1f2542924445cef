use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pairing::pair_attendance;
use crate::db::pool::DbPool;
use crate::db::queries::{load_attendance_by_session, load_persons, load_session};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use std::collections::HashMap;

/// Show per-person Entrada/Salida pairs and durations for one session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attendance { session } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let s = load_session(&pool.conn, *session)?;
        let records = load_attendance_by_session(&pool.conn, *session)?;

        header(format!(
            "Attendance for session {} '{}' ({})",
            s.id,
            s.title,
            s.state.label()
        ));

        if records.is_empty() {
            info("No attendance recorded.");
            return Ok(());
        }

        let names: HashMap<i64, String> = load_persons(&pool.conn)?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let pairs = pair_attendance(&records);

        let mut table = Table::new(&["PERSON", "ENTRADA", "SALIDA", "DURATION", "STATUS"]);
        for ((person_id, _), pair) in &pairs {
            let name = names
                .get(person_id)
                .cloned()
                .unwrap_or_else(|| format!("(unknown person #{})", person_id));

            let entrada = pair
                .entrada
                .as_ref()
                .map(|r| r.recorded_str())
                .unwrap_or_else(|| "--".to_string());
            let salida = pair
                .salida
                .as_ref()
                .map(|r| r.recorded_str())
                .unwrap_or_else(|| "--".to_string());
            let duration = pair
                .duration_minutes()
                .map(|m| format!("{} min", m))
                .unwrap_or_else(|| "--".to_string());

            let status = if pair.entrada_penalized() {
                "late (no dieta)"
            } else if pair.is_complete() {
                "complete"
            } else if pair.is_open() {
                "present, not finished"
            } else {
                "salida only"
            };

            table.add_row(vec![
                name,
                entrada,
                salida,
                duration,
                status.to_string(),
            ]);
        }
        print!("{}", table.render(cfg.separator()));
    }
    Ok(())
}
