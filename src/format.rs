//! Display formatting helpers

/// Formats a duration in seconds as zero-padded `HH:MM:SS`. Hours are not
/// wrapped at 24.
pub fn elapsed_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
