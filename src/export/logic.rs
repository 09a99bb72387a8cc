// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::svg_export::export_svg_dir;
use crate::export::xlsx::export_xlsx;
use crate::models::LogSheet;
use crate::ui::messages::warning;
use crate::utils::path::require_absolute;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export already segmented sheets.
    ///
    /// - `format`: csv | json | xlsx | pdf | svg
    /// - `file`: absolute output path; for `svg` it names a directory that
    ///   receives one file per day.
    pub fn export(
        sheets: &[LogSheet],
        format: ExportFormat,
        file: &str,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        let path = require_absolute(file)?;

        if sheets.is_empty() {
            warning("No log sheets to export.");
            return Ok(());
        }

        let panels = || Core::build_panels(sheets, cfg.canvas(), &cfg.grid_style(), &cfg.date_format);

        // svg writes a directory; every other format a single file
        if format != ExportFormat::Svg {
            ensure_writable(&path, force)?;
        }

        match format {
            ExportFormat::Csv => export_csv(sheets, &path)?,
            ExportFormat::Json => export_json(sheets, &path)?,
            ExportFormat::Xlsx => export_xlsx(sheets, &path)?,
            ExportFormat::Pdf => export_pdf(&panels(), &path)?,
            ExportFormat::Svg => {
                export_svg_dir(&panels(), &path, force)?;
            }
        }

        Ok(())
    }
}
