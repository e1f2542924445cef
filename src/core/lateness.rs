//! Time-window evaluation for check-ins.
//!
//! Early-morning sessions get a wider tolerance (travel time before the
//! town hall opens); the rest of the day uses the standard window.

use chrono::{NaiveDateTime, Timelike};

/// Fixed marker written into the Entrada note when the check-in is late.
/// The payment aggregator excludes any session whose Entrada carries it.
pub const NO_DIETA_MARKER: &str = "no dietary compensation";

/// Tolerance in minutes before a check-in counts as late: sessions
/// scheduled before 09:00 allow 30 minutes, later ones 15.
pub const EARLY_TOLERANCE_MIN: i64 = 30;
pub const STANDARD_TOLERANCE_MIN: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatenessCheck {
    pub is_late: bool,
    pub tolerance_minutes: i64,
    pub minutes_after_start: i64,
}

pub fn tolerance_for(scheduled_at: NaiveDateTime) -> i64 {
    if scheduled_at.hour() < 9 {
        EARLY_TOLERANCE_MIN
    } else {
        STANDARD_TOLERANCE_MIN
    }
}

/// Decide whether a check-in at `now` is late for a session scheduled at
/// `scheduled_at`. Exactly at `scheduled + tolerance` is still on time.
///
/// Both timestamps must be naive local times in the municipal offset
/// (see `utils::time::now_local`); callers never mix device-local time in.
pub fn evaluate_lateness(scheduled_at: NaiveDateTime, now: NaiveDateTime) -> LatenessCheck {
    let tolerance = tolerance_for(scheduled_at);
    let elapsed = (now - scheduled_at).num_minutes();

    LatenessCheck {
        is_late: elapsed > tolerance,
        tolerance_minutes: tolerance,
        minutes_after_start: elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn tolerance_depends_on_scheduled_hour() {
        assert_eq!(tolerance_for(at(7, 0)), 30);
        assert_eq!(tolerance_for(at(8, 59)), 30);
        assert_eq!(tolerance_for(at(9, 0)), 15);
        assert_eq!(tolerance_for(at(14, 30)), 15);
    }

    #[test]
    fn exactly_at_tolerance_is_on_time() {
        // 10:00 session, 15' window: 10:15 on time, 10:16 late
        let check = evaluate_lateness(at(10, 0), at(10, 15));
        assert!(!check.is_late);
        assert_eq!(check.tolerance_minutes, 15);

        let check = evaluate_lateness(at(10, 0), at(10, 16));
        assert!(check.is_late);
        assert_eq!(check.minutes_after_start, 16);
    }

    #[test]
    fn early_session_gets_wide_window() {
        // 08:00 session, 30' window: 08:16 and 08:30 on time, 08:31 late
        assert!(!evaluate_lateness(at(8, 0), at(8, 16)).is_late);
        assert!(!evaluate_lateness(at(8, 0), at(8, 30)).is_late);
        assert!(evaluate_lateness(at(8, 0), at(8, 31)).is_late);
    }

    #[test]
    fn standard_session_boundaries() {
        assert!(!evaluate_lateness(at(10, 0), at(10, 14)).is_late);
        assert!(evaluate_lateness(at(10, 0), at(10, 16)).is_late);
    }

    #[test]
    fn early_arrival_is_on_time() {
        let check = evaluate_lateness(at(10, 0), at(9, 40));
        assert!(!check.is_late);
        assert_eq!(check.minutes_after_start, -20);
    }
}
