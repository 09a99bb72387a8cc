// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{TimelineExport, events_to_rows};
use crate::export::notify_export_success;
use crate::models::LogSheet;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export every sheet with its summary and the trip totals, pretty-printed.
pub(crate) fn export_json(sheets: &[LogSheet], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = TimelineExport::from_sheets(sheets);
    let json_data = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export one CSV row per event, tagged with its day (header from serde).
pub(crate) fn export_csv(sheets: &[LogSheet], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    for item in events_to_rows(sheets) {
        wtr.serialize(&item)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
