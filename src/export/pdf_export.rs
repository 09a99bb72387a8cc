// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{EventExport, event_headers, event_to_row};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::core::logic::DayPanel;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export PDF: one log sheet per day (grid plus activity table).
pub(crate) fn export_pdf(panels: &[DayPanel], path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = event_headers();
    let mut pdf = PdfManager::new();

    for panel in panels {
        let rows: Vec<Vec<String>> = panel
            .sheet
            .events
            .iter()
            .map(|ev| event_to_row(&EventExport::from_event(panel.day_number, ev)))
            .collect();
        pdf.write_day(panel, &headers, &rows);
    }

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
