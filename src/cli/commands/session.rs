use crate::cli::parser::SessionAction;
use crate::config::Config;
use crate::core::correlative::{assign_correlatives, format_correlative};
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_sessions_by_year;
use crate::errors::AppResult;
use crate::models::session_state::SessionState;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;
use crate::utils::time::{now_local, parse_datetime};
use chrono::{Datelike, Utc};

pub fn handle(action: &SessionAction, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        SessionAction::Create {
            title,
            scheduled,
            description,
        } => {
            let scheduled_at = parse_datetime(scheduled)?;
            let session = SessionLogic::create(
                &mut pool,
                title.clone(),
                description.clone(),
                scheduled_at,
                Utc::now().to_rfc3339(),
            )?;
            success(format!(
                "Created session {} '{}' at {} (preparing)",
                session.id,
                session.title,
                session.scheduled_str()
            ));
        }

        SessionAction::Start { id } => {
            let session = SessionLogic::transition(&mut pool, *id, SessionState::InProgress)?;
            success(format!(
                "Session {} is now in progress; attendance can be marked.",
                session.id
            ));
        }

        SessionAction::Finalize { id } => {
            let session = SessionLogic::transition(&mut pool, *id, SessionState::Finalized)?;
            success(format!("Session {} finalized; attendance frozen.", session.id));
        }

        SessionAction::Reopen { id } => {
            let session = SessionLogic::transition(&mut pool, *id, SessionState::InProgress)?;
            success(format!(
                "Session {} re-opened for corrections (correlatives are unaffected).",
                session.id
            ));
        }

        SessionAction::List { year } => {
            let year = match year {
                Some(y) => *y,
                None => now_local(cfg.offset()?).year(),
            };
            let sessions = load_sessions_by_year(&pool.conn, year)?;
            if sessions.is_empty() {
                info(format!("No sessions scheduled in {}.", year));
                return Ok(());
            }

            let correlatives = assign_correlatives(&sessions, year);

            let mut table = Table::new(&["ID", "NO.", "SCHEDULED", "STATE", "TITLE"]);
            for s in sessions {
                let corr = correlatives
                    .get(&s.id)
                    .map(|n| format_correlative(*n))
                    .unwrap_or_else(|| "--".to_string());
                table.add_row(vec![
                    s.id.to_string(),
                    corr,
                    s.scheduled_str(),
                    s.state.label().to_string(),
                    s.title,
                ]);
            }
            print!("{}", table.render(cfg.separator()));
        }
    }
    Ok(())
}
