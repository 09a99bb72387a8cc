// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Interpret an exported date or timestamp cell as an Excel serial plus the
/// number format to show it with. Anything else → None.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return excel_serial(&dt).map(|serial| ("yyyy-mm-dd hh:mm", serial));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return excel_serial(&dt).map(|serial| ("yyyy-mm-dd", serial));
    }

    None
}

/// Days since 1899-12-30, with the time of day as the fraction.
fn excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let secs = (*dt - epoch).num_seconds();
    Some(secs as f64 / 86_400.0)
}
