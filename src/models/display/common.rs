//! Common display utilities and helpers

use chrono::{DateTime, NaiveDateTime, Utc};

/// Placeholder for values the service did not send
pub const MISSING: &str = "--";

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render an optional value, falling back to [`MISSING`]
pub fn or_missing<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Format a service timestamp as `YYYY-MM-DD HH:MM`.
///
/// The service sends naive UTC timestamps (`2025-03-01T10:00:00.123456`);
/// RFC 3339 strings are accepted too. Anything else is returned unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    if let Ok(dt) = timestamp.parse::<DateTime<Utc>>() {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }

    timestamp.to_string()
}

/// Format an optional timestamp, falling back to [`MISSING`]
pub fn format_opt_timestamp(timestamp: Option<&str>) -> String {
    timestamp
        .map(format_timestamp)
        .unwrap_or_else(|| MISSING.to_string())
}

/// Format a duration in hours (e.g. `2d 4h`, `5.5h`)
pub fn format_hours(hours: f64) -> String {
    if hours >= 48.0 {
        let days = (hours / 24.0).floor();
        let rest = (hours - days * 24.0).round();
        format!("{}d {}h", days, rest)
    } else {
        format!("{:.1}h", hours)
    }
}
