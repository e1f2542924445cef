//! Pairing of raw attendance rows into per-(person, session) Entrada/Salida
//! pairs with a computed duration.

use crate::core::lateness::NO_DIETA_MARKER;
use crate::models::attendance::AttendanceRecord;
use std::collections::BTreeMap;

/// Derived pair for one person in one session. Not persisted; rebuilt from
/// the raw rows every time it is needed.
#[derive(Debug, Clone, Default)]
pub struct AttendancePair {
    pub entrada: Option<AttendanceRecord>,
    pub salida: Option<AttendanceRecord>,
}

impl AttendancePair {
    /// Minutes between Entrada and Salida. `None` when either side is
    /// missing or when Salida precedes Entrada (invalid, not negative).
    pub fn duration_minutes(&self) -> Option<i64> {
        let entrada = self.entrada.as_ref()?;
        let salida = self.salida.as_ref()?;

        let minutes = (salida.recorded_at - entrada.recorded_at).num_minutes();
        if minutes < 0 { None } else { Some(minutes) }
    }

    /// Both events present with a valid (non-negative) duration.
    pub fn is_complete(&self) -> bool {
        self.duration_minutes().is_some()
    }

    /// Whether the Entrada carries the late-penalty marker.
    pub fn entrada_penalized(&self) -> bool {
        self.entrada
            .as_ref()
            .is_some_and(|e| e.note.contains(NO_DIETA_MARKER))
    }

    /// "present, not finished": checked in but never checked out, or the
    /// recorded times are inconsistent.
    pub fn is_open(&self) -> bool {
        self.entrada.is_some() && !self.is_complete()
    }
}

/// Group a flat list of attendance rows into one pair per (person, session).
///
/// The single Entrada and Salida are assigned by their kind tag. If the
/// store ever holds duplicates of the same kind (the precondition check
/// should prevent it), the last-seen record wins: a defined tie-break,
/// not an error. Running this twice over the same rows yields the same map.
pub fn pair_attendance(
    records: &[AttendanceRecord],
) -> BTreeMap<(i64, i64), AttendancePair> {
    let mut pairs: BTreeMap<(i64, i64), AttendancePair> = BTreeMap::new();

    for rec in records {
        let pair = pairs
            .entry((rec.person_id, rec.session_id))
            .or_default();

        if rec.kind.is_entrada() {
            pair.entrada = Some(rec.clone());
        } else {
            pair.salida = Some(rec.clone());
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance_kind::AttendanceKind;
    use crate::models::geo::GeoPoint;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 4)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn rec(id: i64, person: i64, session: i64, kind: AttendanceKind, h: u32, m: u32) -> AttendanceRecord {
        AttendanceRecord {
            id,
            person_id: person,
            session_id: session,
            kind,
            recorded_at: ts(h, m),
            location: GeoPoint { lat: 14.6, lng: -90.5 },
            note: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn groups_by_person_and_session() {
        let records = vec![
            rec(1, 10, 1, AttendanceKind::Entrada, 9, 0),
            rec(2, 10, 1, AttendanceKind::Salida, 11, 30),
            rec(3, 11, 1, AttendanceKind::Entrada, 9, 5),
            rec(4, 10, 2, AttendanceKind::Entrada, 15, 0),
        ];

        let pairs = pair_attendance(&records);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[&(10, 1)].duration_minutes(), Some(150));
        assert!(pairs[&(11, 1)].is_open());
        assert!(pairs[&(10, 2)].is_open());
    }

    #[test]
    fn duplicate_kind_last_seen_wins() {
        let records = vec![
            rec(1, 10, 1, AttendanceKind::Entrada, 9, 0),
            rec(2, 10, 1, AttendanceKind::Entrada, 9, 20),
            rec(3, 10, 1, AttendanceKind::Salida, 11, 0),
        ];

        let pairs = pair_attendance(&records);
        let pair = &pairs[&(10, 1)];
        assert_eq!(pair.entrada.as_ref().unwrap().id, 2);
        assert_eq!(pair.duration_minutes(), Some(100));
    }

    #[test]
    fn idempotent_over_same_rows() {
        let records = vec![
            rec(1, 10, 1, AttendanceKind::Entrada, 9, 0),
            rec(2, 10, 1, AttendanceKind::Salida, 11, 0),
            rec(3, 11, 2, AttendanceKind::Salida, 12, 0),
        ];

        let a = pair_attendance(&records);
        let b = pair_attendance(&records);
        assert_eq!(a.len(), b.len());
        for (key, pair) in &a {
            assert_eq!(
                pair.duration_minutes(),
                b[key].duration_minutes()
            );
            assert_eq!(
                pair.entrada.as_ref().map(|e| e.id),
                b[key].entrada.as_ref().map(|e| e.id)
            );
        }
    }

    #[test]
    fn negative_duration_is_invalid_not_negative() {
        let records = vec![
            rec(1, 10, 1, AttendanceKind::Entrada, 11, 0),
            rec(2, 10, 1, AttendanceKind::Salida, 9, 0),
        ];

        let pairs = pair_attendance(&records);
        let pair = &pairs[&(10, 1)];
        assert_eq!(pair.duration_minutes(), None);
        assert!(!pair.is_complete());
        assert!(pair.is_open());
    }

    #[test]
    fn salida_alone_is_neither_complete_nor_open() {
        let records = vec![rec(1, 10, 1, AttendanceKind::Salida, 11, 0)];
        let pairs = pair_attendance(&records);
        let pair = &pairs[&(10, 1)];
        assert!(!pair.is_complete());
        assert!(!pair.is_open());
    }
}
