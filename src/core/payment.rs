//! Dieta payment aggregation.
//!
//! Pure computation over data already fetched into memory: sessions of the
//! reporting year, paired attendance, and the roster. One pass, one
//! consistent snapshot; nothing here touches the database.

use crate::core::correlative::assign_correlatives;
use crate::core::pairing::AttendancePair;
use crate::core::roles::role_weight;
use crate::models::person::Person;
use crate::models::report::{CompensationRow, DietaReport, ReportPeriod};
use crate::models::session::Session;
use crate::ui::messages::warning;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Placeholder label for attendance rows whose person id cannot be
/// resolved against the roster. Shown instead of silently dropping the
/// row, so operators notice the inconsistency.
fn unknown_person_label(person_id: i64) -> String {
    format!("(unknown person #{})", person_id)
}

/// A session is compensable for a person when the pair is complete (both
/// events, non-negative duration) and the Entrada is not penalized for
/// lateness.
fn is_compensable(pair: &AttendancePair) -> bool {
    pair.is_complete() && !pair.entrada_penalized()
}

/// Build the dieta report for one period.
///
/// `sessions` must cover the whole reporting year so the annual
/// correlative numbering stays correct even for a monthly report.
/// People with zero compensable sessions are filtered out entirely.
pub fn aggregate_payments(
    sessions: &[Session],
    pairs: &BTreeMap<(i64, i64), AttendancePair>,
    roster: &HashMap<i64, Person>,
    rate_cents: i64,
    period: ReportPeriod,
) -> DietaReport {
    let correlatives = assign_correlatives(sessions, period.year);

    let in_period: HashSet<i64> = sessions
        .iter()
        .filter(|s| {
            s.is_executed()
                && s.scheduled_year() == period.year
                && period.month.is_none_or(|m| s.scheduled_month() == m)
        })
        .map(|s| s.id)
        .collect();

    let first_correlative = in_period
        .iter()
        .filter_map(|id| correlatives.get(id))
        .min()
        .copied();
    let last_correlative = in_period
        .iter()
        .filter_map(|id| correlatives.get(id))
        .max()
        .copied();

    // Per-person compensable count, in pair-key order (person id ascending)
    // so the later stable sort has a deterministic base ordering.
    let mut counts: Vec<(i64, u32)> = Vec::new();
    for ((person_id, session_id), pair) in pairs {
        if !in_period.contains(session_id) || !is_compensable(pair) {
            continue;
        }
        match counts.last_mut() {
            Some((last_id, n)) if last_id == person_id => *n += 1,
            _ => counts.push((*person_id, 1)),
        }
    }

    let mut rows: Vec<CompensationRow> = counts
        .into_iter()
        .map(|(person_id, count)| {
            let (name, title) = match roster.get(&person_id) {
                Some(p) => (p.name.clone(), p.title.clone()),
                None => {
                    warning(format!(
                        "person {} has attendance but is missing from the roster",
                        person_id
                    ));
                    (unknown_person_label(person_id), String::new())
                }
            };

            CompensationRow {
                person_id,
                name,
                title,
                compensable_sessions: count,
                rate_cents,
                total_cents: count as i64 * rate_cents,
            }
        })
        .collect();

    // Stable: ties (equal or unmatched weight) keep the base ordering.
    rows.sort_by_key(|r| role_weight(&r.title));

    DietaReport {
        year: period.year,
        month: period.month,
        session_count: in_period.len() as u32,
        first_correlative,
        last_correlative,
        rate_cents,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lateness::NO_DIETA_MARKER;
    use crate::core::pairing::pair_attendance;
    use crate::models::attendance::AttendanceRecord;
    use crate::models::attendance_kind::AttendanceKind;
    use crate::models::geo::GeoPoint;
    use crate::models::session_state::SessionState;
    use chrono::{NaiveDate, NaiveDateTime};

    const RATE: i64 = 150_000; // Q1,500.00 per session

    fn ts(month: u32, day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, month, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn session(id: i64, month: u32, day: u32, state: SessionState) -> Session {
        Session {
            id,
            title: format!("Sesión ordinaria {}", id),
            description: String::new(),
            scheduled_at: ts(month, day, 9, 0),
            state,
            created_at: String::new(),
        }
    }

    fn rec(
        person: i64,
        session: i64,
        kind: AttendanceKind,
        at: NaiveDateTime,
        note: &str,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            person_id: person,
            session_id: session,
            kind,
            recorded_at: at,
            location: GeoPoint { lat: 14.6, lng: -90.5 },
            note: note.to_string(),
            created_at: String::new(),
        }
    }

    fn roster() -> HashMap<i64, Person> {
        let mut m = HashMap::new();
        m.insert(
            1,
            Person {
                id: 1,
                name: "Ana López".into(),
                title: "Alcaldesa Municipal".into(),
            },
        );
        m.insert(
            2,
            Person {
                id: 2,
                name: "Pedro Sosa".into(),
                title: "Concejal Segundo".into(),
            },
        );
        m.insert(
            3,
            Person {
                id: 3,
                name: "María Ruiz".into(),
                title: "Síndico Primero".into(),
            },
        );
        m
    }

    #[test]
    fn late_session_excluded_from_count() {
        let sessions = vec![
            session(1, 3, 2, SessionState::Finalized),
            session(2, 3, 9, SessionState::Finalized),
            session(3, 3, 16, SessionState::Finalized),
        ];
        // person 2: sessions 1 and 2 clean, session 3 late
        let records = vec![
            rec(2, 1, AttendanceKind::Entrada, ts(3, 2, 9, 5), ""),
            rec(2, 1, AttendanceKind::Salida, ts(3, 2, 11, 0), ""),
            rec(2, 2, AttendanceKind::Entrada, ts(3, 9, 9, 10), ""),
            rec(2, 2, AttendanceKind::Salida, ts(3, 9, 11, 0), ""),
            rec(2, 3, AttendanceKind::Entrada, ts(3, 16, 9, 40), NO_DIETA_MARKER),
            rec(2, 3, AttendanceKind::Salida, ts(3, 16, 11, 0), ""),
        ];
        let pairs = pair_attendance(&records);

        let report =
            aggregate_payments(&sessions, &pairs, &roster(), RATE, ReportPeriod::year(2026));

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.compensable_sessions, 2);
        assert_eq!(row.total_cents, 2 * RATE);
        assert_eq!(report.session_count, 3);
        assert_eq!(report.first_correlative, Some(1));
        assert_eq!(report.last_correlative, Some(3));
    }

    #[test]
    fn zero_count_people_are_filtered_out() {
        let sessions = vec![session(1, 4, 6, SessionState::Finalized)];
        // person 1 complete, person 3 only checked in
        let records = vec![
            rec(1, 1, AttendanceKind::Entrada, ts(4, 6, 9, 0), ""),
            rec(1, 1, AttendanceKind::Salida, ts(4, 6, 10, 30), ""),
            rec(3, 1, AttendanceKind::Entrada, ts(4, 6, 9, 0), ""),
        ];
        let pairs = pair_attendance(&records);

        let report =
            aggregate_payments(&sessions, &pairs, &roster(), RATE, ReportPeriod::year(2026));

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].person_id, 1);
    }

    #[test]
    fn rows_follow_protocol_order() {
        let sessions = vec![session(1, 4, 6, SessionState::Finalized)];
        let mut records = Vec::new();
        // insertion order: concejal, síndico, alcaldesa
        for person in [2, 3, 1] {
            records.push(rec(person, 1, AttendanceKind::Entrada, ts(4, 6, 9, 0), ""));
            records.push(rec(person, 1, AttendanceKind::Salida, ts(4, 6, 11, 0), ""));
        }
        let pairs = pair_attendance(&records);

        let report =
            aggregate_payments(&sessions, &pairs, &roster(), RATE, ReportPeriod::year(2026));

        let order: Vec<i64> = report.rows.iter().map(|r| r.person_id).collect();
        // alcaldesa, síndico primero, concejal segundo
        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn unknown_person_gets_placeholder_row() {
        let sessions = vec![session(1, 4, 6, SessionState::Finalized)];
        let records = vec![
            rec(77, 1, AttendanceKind::Entrada, ts(4, 6, 9, 0), ""),
            rec(77, 1, AttendanceKind::Salida, ts(4, 6, 11, 0), ""),
        ];
        let pairs = pair_attendance(&records);

        let report =
            aggregate_payments(&sessions, &pairs, &roster(), RATE, ReportPeriod::year(2026));

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].name, "(unknown person #77)");
        assert_eq!(report.rows[0].compensable_sessions, 1);
    }

    #[test]
    fn monthly_report_keeps_annual_correlatives() {
        let sessions = vec![
            session(1, 1, 10, SessionState::Finalized),
            session(2, 2, 10, SessionState::Finalized),
            session(3, 3, 10, SessionState::Finalized),
            session(4, 3, 24, SessionState::Finalized),
        ];
        let records = vec![
            rec(1, 3, AttendanceKind::Entrada, ts(3, 10, 9, 0), ""),
            rec(1, 3, AttendanceKind::Salida, ts(3, 10, 11, 0), ""),
        ];
        let pairs = pair_attendance(&records);

        let report = aggregate_payments(
            &sessions,
            &pairs,
            &roster(),
            RATE,
            ReportPeriod::month(2026, 3),
        );

        assert_eq!(report.session_count, 2);
        assert_eq!(report.first_correlative, Some(3));
        assert_eq!(report.last_correlative, Some(4));
        assert_eq!(report.rows[0].compensable_sessions, 1);
    }

    #[test]
    fn empty_period_has_explicit_empty_state() {
        let sessions = vec![session(1, 5, 5, SessionState::Preparing)];
        let pairs = BTreeMap::new();

        let report =
            aggregate_payments(&sessions, &pairs, &roster(), RATE, ReportPeriod::year(2026));

        assert!(report.is_empty());
        assert_eq!(report.session_count, 0);
        assert_eq!(report.first_correlative, None);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn totals_scale_with_rate_counts_do_not() {
        let sessions = vec![
            session(1, 6, 1, SessionState::Finalized),
            session(2, 6, 8, SessionState::Finalized),
        ];
        let mut records = Vec::new();
        for s in [1, 2] {
            records.push(rec(2, s, AttendanceKind::Entrada, ts(6, 1, 9, 0), ""));
            records.push(rec(2, s, AttendanceKind::Salida, ts(6, 1, 11, 0), ""));
        }
        let pairs = pair_attendance(&records);

        let base =
            aggregate_payments(&sessions, &pairs, &roster(), RATE, ReportPeriod::year(2026));
        let doubled = aggregate_payments(
            &sessions,
            &pairs,
            &roster(),
            2 * RATE,
            ReportPeriod::year(2026),
        );

        assert_eq!(
            base.rows[0].compensable_sessions,
            doubled.rows[0].compensable_sessions
        );
        assert_eq!(doubled.rows[0].total_cents, 2 * base.rows[0].total_cents);
        assert_eq!(
            base.rows[0].total_cents,
            base.rows[0].compensable_sessions as i64 * RATE
        );
    }
}
