pub mod colors;
pub mod date;
pub mod money;
pub mod table;
pub mod time;

pub use money::format_cents;
