pub mod attendance;
pub mod attendance_kind;
pub mod geo;
pub mod person;
pub mod report;
pub mod session;
pub mod session_state;
