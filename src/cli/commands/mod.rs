pub mod attendance;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod mark;
pub mod person;
pub mod report;
pub mod session;
