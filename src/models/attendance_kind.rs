use serde::Serialize;

/// Attendance event kind: Entrada (check-in) or Salida (check-out).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceKind {
    Entrada,
    Salida,
}

impl AttendanceKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceKind::Entrada => "entrada",
            AttendanceKind::Salida => "salida",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(AttendanceKind::Entrada),
            "salida" => Some(AttendanceKind::Salida),
            _ => None,
        }
    }

    pub fn is_entrada(&self) -> bool {
        matches!(self, AttendanceKind::Entrada)
    }

    pub fn is_salida(&self) -> bool {
        matches!(self, AttendanceKind::Salida)
    }
}
