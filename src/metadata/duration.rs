// Duration formatting for the scrub bar labels

/// Label shown for the total duration when no episode is selected.
pub const EMPTY_DURATION: &str = "00:00:00";

/// Format a second count as `HH:MM:SS`.
///
/// Hours are not wrapped, so anything past 99 hours simply grows a digit.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Same as [`format_duration`] but for an optional duration.
pub fn format_optional_duration(seconds: Option<u64>) -> String {
    seconds
        .map(format_duration)
        .unwrap_or_else(|| EMPTY_DURATION.to_string())
}
