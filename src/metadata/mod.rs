// Episode metadata helpers
// Display formatting for durations and member list parsing

pub mod duration;
pub mod parser;

pub use duration::{format_duration, format_optional_duration, EMPTY_DURATION};
pub use parser::parse_members;
