//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// Counts characters, not bytes, so currency symbols like `₹` are safe.
///
/// # Examples
///
/// ```rust
/// use lastmile_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("UberGo", 10), "UberGo");
/// assert_eq!(truncate_string("UberPremier", 8), "UberP...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a duration in seconds as whole minutes, rounding up.
pub fn format_minutes(seconds: f64) -> String {
    let minutes = (seconds / 60.0).ceil().max(0.0);
    format!("{minutes:.0} min")
}

/// Format a distance in meters as kilometers with two decimals.
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}
