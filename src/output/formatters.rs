//! Reusable formatting utilities for CLI output
//!
//! Common formatting for timestamps, optional values, and rates used across
//! multiple commands.

use chrono::{DateTime, Local, Utc};

/// Placeholder shown for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a UTC timestamp as local date and time.
///
/// # Example output
/// `2025-01-15 14:30`
pub fn format_datetime(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Show an optional string, or a dash when missing.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Shorten text to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Format a percentage with one decimal place.
pub fn format_percent(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.1}%", rate),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_missing() {
        assert_eq!(format_datetime(None), "N/A");
    }

    #[test]
    fn test_format_datetime_valid() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let result = format_datetime(Some(&ts));
        // Exact output depends on local TZ
        assert!(result.starts_with("2025-01-1"));
        assert_eq!(result.len(), "2025-01-15 12:00".len());
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("ibm")), "ibm");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(75.0)), "75.0%");
        assert_eq!(format_percent(None), "N/A");
    }
}
