use serde::Serialize;

/// Reporting window: one calendar year, optionally narrowed to a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: Option<u32>,
}

impl ReportPeriod {
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }

    pub fn label(&self) -> String {
        match self.month {
            Some(m) => format!("{:04}-{:02}", self.year, m),
            None => format!("{:04}", self.year),
        }
    }
}

/// One line of the dieta payment table. Money is integer centavos.
#[derive(Debug, Clone, Serialize)]
pub struct CompensationRow {
    pub person_id: i64,
    pub name: String,
    pub title: String,
    pub compensable_sessions: u32,
    pub rate_cents: i64,
    pub total_cents: i64,
}

/// Aggregated dieta report for one period.
///
/// `first_correlative`/`last_correlative` are annual-scope numbers, so a
/// monthly report still quotes the year-wide numbering ("sessions 004
/// through 007 of 2026").
#[derive(Debug, Clone, Serialize)]
pub struct DietaReport {
    pub year: i32,
    pub month: Option<u32>,
    pub session_count: u32,
    pub first_correlative: Option<u32>,
    pub last_correlative: Option<u32>,
    pub rate_cents: i64,
    pub rows: Vec<CompensationRow>,
}

impl DietaReport {
    pub fn is_empty(&self) -> bool {
        self.session_count == 0
    }

    pub fn period_label(&self) -> String {
        ReportPeriod {
            year: self.year,
            month: self.month,
        }
        .label()
    }
}
