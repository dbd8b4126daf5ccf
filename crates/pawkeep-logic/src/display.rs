//! Display helpers: rounded percentages and the play-time string.

/// Rounds a vital or growth value to a whole display percent.
pub fn rounded_percent(value: f32) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Formats elapsed play time as `"Xh Ym Zs"` with minutes and seconds
/// reduced modulo 60.
pub fn format_play_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}
