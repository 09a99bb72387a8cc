//! Time utilities: parsing planner timestamps, hour arithmetic, formatting durations.

use chrono::{DateTime, NaiveDateTime};

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp as local wall-clock time.
///
/// Naive forms are taken as-is. A string carrying an offset keeps the
/// wall-clock reading in that offset.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in LOCAL_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local())
}

/// `4.5` → `"4h 30m"`, `2.0` → `"2h"`.
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;

    if m == 0 {
        format!("{}h", h)
    } else {
        format!("{}h {}m", h, m)
    }
}

/// Compact duration label drawn inside grid blocks: `4.5h`, `1h`, `0.25h`.
pub fn format_duration_label(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    format!("{}h", rounded)
}

pub fn format_miles(miles: f64) -> String {
    format!("{:.1} mi", miles)
}
