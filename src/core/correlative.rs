//! Annual correlative numbering of executed sessions.
//!
//! The correlative is a derived value: sessions that left the Preparing
//! state, restricted to one calendar year, ordered by scheduled time, get
//! a 1-based sequence number. There is no persisted correlative column;
//! the assignment is recomputed fresh at query time, so re-opening a
//! finalized session never renumbers anything.

use crate::models::session::Session;
use std::collections::HashMap;

/// Assign correlatives to the executed sessions of `year`.
/// Preparing sessions get no entry. Ordering is by `scheduled_at` with the
/// row id as secondary key, so two sessions sharing a timestamp still
/// number deterministically (creation order).
pub fn assign_correlatives(sessions: &[Session], year: i32) -> HashMap<i64, u32> {
    let mut executed: Vec<&Session> = sessions
        .iter()
        .filter(|s| s.is_executed() && s.scheduled_year() == year)
        .collect();

    executed.sort_by_key(|s| (s.scheduled_at, s.id));

    executed
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id, (i + 1) as u32))
        .collect()
}

/// Display form used in official documents: zero-padded to 3 digits.
pub fn format_correlative(n: u32) -> String {
    format!("{:03}", n)
}
