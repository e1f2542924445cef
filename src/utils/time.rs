//! Time utilities: the single timezone policy, plus datetime parsing.
//!
//! Every timestamp in the system is a naive local time in the fixed
//! municipal UTC offset from the configuration. "Now" is always derived
//! through [`now_local`]; device-local time never leaks in.

use crate::errors::{AppError, AppResult};
use chrono::{FixedOffset, NaiveDateTime, Utc};

/// Parse a fixed offset like "-06:00" or "+01:30".
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let err = || AppError::Config(format!("invalid utc_offset '{}' (expected ±HH:MM)", s));

    let (sign, rest) = match s.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(err()),
    };

    let (h, m) = rest.split_once(':').ok_or_else(err)?;
    let hours: i32 = h.parse().map_err(|_| err())?;
    let minutes: i32 = m.parse().map_err(|_| err())?;
    if hours > 14 || minutes > 59 {
        return Err(err());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(err)
}

/// Current time as a naive local timestamp in the municipal offset.
pub fn now_local(offset: FixedOffset) -> NaiveDateTime {
    Utc::now().with_timezone(&offset).naive_local()
}

/// Parse "YYYY-MM-DD HH:MM" (the storage and CLI datetime format).
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offsets() {
        assert_eq!(parse_utc_offset("-06:00").unwrap().local_minus_utc(), -6 * 3600);
        assert_eq!(parse_utc_offset("+01:30").unwrap().local_minus_utc(), 5400);
        assert!(parse_utc_offset("06:00").is_err());
        assert!(parse_utc_offset("-6").is_err());
        assert!(parse_utc_offset("-15:00").is_err());
    }

    #[test]
    fn datetime_roundtrip() {
        let dt = parse_datetime("2026-03-10 08:31").unwrap();
        assert_eq!(format_datetime(dt), "2026-03-10 08:31");
        assert!(parse_datetime("2026-03-10T08:31").is_err());
        assert!(parse_datetime("10/03/2026 08:31").is_err());
    }
}
