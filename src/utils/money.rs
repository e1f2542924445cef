//! Money formatting. Amounts are integer centavos everywhere; this is the
//! only place that turns them into display strings.

pub fn format_cents(cents: i64, symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
}

/// Parse a rate given on the CLI as "1500" or "1500.00" into centavos.
pub fn parse_amount(s: &str) -> Option<i64> {
    let (units, frac) = match s.split_once('.') {
        Some((u, f)) => (u, f),
        None => (s, ""),
    };

    let units: i64 = units.parse().ok()?;
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        2 => frac.parse().ok()?,
        _ => return None,
    };

    Some(units * 100 + frac_cents)
}
