/// Shown right after a track is loaded, before the first position tick.
pub const RESET_DISPLAY: &str = "00:00/00:00";

/// Placeholder for an unknown or invalid time value.
const UNKNOWN_TIME: &str = "00:00";

/// `M:SS`, seconds zero-padded, minutes not. NaN, infinite or negative input
/// renders as `00:00`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return UNKNOWN_TIME.to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// `position/duration` as shown next to the seek bar.
pub fn time_display(position: f64, duration: f64) -> String {
    format!("{}/{}", format_clock(position), format_clock(duration))
}

/// Seek-bar fill in percent, 0 when the duration is not usable yet.
pub fn seek_fill_percent(position: f64, duration: f64) -> f64 {
    if !is_known_duration(duration) || !position.is_finite() {
        return 0.0;
    }
    (position / duration * 100.0).clamp(0.0, 100.0)
}

pub fn is_known_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}
