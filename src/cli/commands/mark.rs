use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::MarkLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::attendance_kind::AttendanceKind;
use crate::models::geo::GeoPoint;
use crate::ui::messages::{success, warning};
use crate::utils::time::{now_local, parse_datetime};

/// Handle `checkin` and `checkout`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (session, person, lat, lng, at, kind) = match cmd {
        Commands::Checkin {
            session,
            person,
            lat,
            lng,
            at,
        } => (*session, *person, *lat, *lng, at, AttendanceKind::Entrada),
        Commands::Checkout {
            session,
            person,
            lat,
            lng,
            at,
        } => (*session, *person, *lat, *lng, at, AttendanceKind::Salida),
        _ => return Ok(()),
    };

    // Coordinate is mandatory and validated before anything touches the DB.
    let location = GeoPoint::new(lat, lng)?;

    // "now" under the single timezone policy, unless back-filled with --at.
    let now = match at {
        Some(s) => parse_datetime(s)?,
        None => now_local(cfg.offset()?),
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let outcome = MarkLogic::apply(&mut pool, session, person, kind, location, now)?;

    match outcome.lateness {
        Some(check) if check.is_late => {
            warning(format!(
                "{} checked in LATE for '{}' ({} min after start, tolerance {} min): no dietary compensation for this session.",
                outcome.person_name,
                outcome.session_title,
                check.minutes_after_start,
                check.tolerance_minutes
            ));
        }
        Some(_) => {
            success(format!(
                "{} checked in on time for '{}'.",
                outcome.person_name, outcome.session_title
            ));
        }
        None => {
            success(format!(
                "{} checked out of '{}'.",
                outcome.person_name, outcome.session_title
            ));
        }
    }

    Ok(())
}
