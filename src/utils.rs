//! Utility functions shared across the codebase.
//!
//! Formatting helpers for fractional hours and filesystem paths.

use std::path::Path;

use crate::time_state::hours_to_naive_time;

/// Format hours past midnight as a `HH:MM` clock string.
///
/// The value is wrapped into a single day first, so out-of-range hours
/// still produce a valid clock reading.
///
/// # Examples
/// ```
/// use daytime::utils::format_clock;
/// assert_eq!(format_clock(6.5), "06:30");
/// assert_eq!(format_clock(17.999), "18:00");
/// ```
pub fn format_clock(hours: f64) -> String {
    // Round to the minute before formatting so 17:59:57 reads as 18:00
    let minutes = (hours * 60.0).round() / 60.0;
    hours_to_naive_time(minutes).format("%H:%M").to_string()
}

/// Format a span of hours as `Hh MMm`, e.g. `13h 05m`.
///
/// # Examples
/// ```
/// use daytime::utils::format_span;
/// assert_eq!(format_span(13.0 + 5.0 / 60.0), "13h 05m");
/// assert_eq!(format_span(-1.0), "0h 00m");
/// ```
pub fn format_span(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{}h {:02}m", total_minutes / 60, total_minutes % 60)
}

/// Display a path with the home directory abbreviated to `~`.
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
