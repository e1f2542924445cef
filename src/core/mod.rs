pub mod checkin;
pub mod correlative;
pub mod lateness;
pub mod pairing;
pub mod payment;
pub mod report;
pub mod roles;
pub mod session;
