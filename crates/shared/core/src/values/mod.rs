use chrono::Duration;

/// Game-clock seconds
pub type Seconds = u32;

/// Length of a regulation quarter (15 minutes)
pub const QUARTER_SECONDS: Seconds = 900;

/// Length of a half (two quarters)
pub const HALF_SECONDS: Seconds = 2 * QUARTER_SECONDS;

/// Render a clock reading as `MM:SS`
pub fn format_clock(seconds: Seconds) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Convert a clock reading into a chrono duration
pub fn as_duration(seconds: Seconds) -> Duration {
    Duration::seconds(i64::from(seconds))
}
