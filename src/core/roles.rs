//! Protocol ordering of council roles.
//!
//! The ranking is municipal protocol, not something derivable: mayor first,
//! síndicos in numeral order, concejales in numeral order, then alternates,
//! then the secretary, then everyone else. The table is an ordered list of
//! regex patterns over the appointment title; first match wins, unmatched
//! titles sort last.

use regex::Regex;
use std::sync::LazyLock;

/// Weight for titles no pattern matches; sorts after every known role.
pub const UNRANKED_WEIGHT: u32 = 999;

/// Ordered (pattern, weight) table. Suplente patterns come before the
/// numbered titular ones so "Concejal Suplente II" ranks as an alternate.
static ROLE_TABLE: LazyLock<Vec<(Regex, u32)>> = LazyLock::new(|| {
    let table: &[(&str, u32)] = &[
        (r"(?i)s[ií]ndic\w*\s+suplente", 60),
        (r"(?i)concejal\s+suplente", 61),
        (r"(?i)suplente", 62),
        (r"(?i)alcald", 10),
        (r"(?i)s[ií]ndic\w*\s+(primer|\bi\b|\b1\b)", 20),
        (r"(?i)s[ií]ndic\w*\s+(segund|\bii\b|\b2\b)", 21),
        (r"(?i)s[ií]ndic\w*\s+(tercer|\biii\b|\b3\b)", 22),
        (r"(?i)s[ií]ndic", 29),
        (r"(?i)concejal\s+(primer|\bi\b|\b1\b)", 30),
        (r"(?i)concejal\s+(segund|\bii\b|\b2\b)", 31),
        (r"(?i)concejal\s+(tercer|\biii\b|\b3\b)", 32),
        (r"(?i)concejal\s+(cuart|\biv\b|\b4\b)", 33),
        (r"(?i)concejal\s+(quint|\bv\b|\b5\b)", 34),
        (r"(?i)concejal\s+(sext|\bvi\b|\b6\b)", 35),
        (r"(?i)concejal\s+(s[eé]ptim|\bvii\b|\b7\b)", 36),
        (r"(?i)concejal", 49),
        (r"(?i)secretari", 90),
    ];

    table
        .iter()
        .map(|(pat, w)| (Regex::new(pat).expect("static role pattern"), *w))
        .collect()
});

/// Protocol weight of a title; lower sorts first.
pub fn role_weight(title: &str) -> u32 {
    for (re, weight) in ROLE_TABLE.iter() {
        if re.is_match(title) {
            return *weight;
        }
    }
    UNRANKED_WEIGHT
}
