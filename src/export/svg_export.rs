// src/export/svg_export.rs

use crate::core::grid::svg::to_svg;
use crate::core::logic::DayPanel;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::ui::messages::{detail, info, success};
use crate::utils::path::day_file_path;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `day-NN_YYYY-MM-DD.svg` for every panel into `dir`.
pub fn export_svg_dir(panels: &[DayPanel], dir: &Path, force: bool) -> AppResult<Vec<PathBuf>> {
    info(format!("Rendering SVG grids into: {}", dir.display()));
    ensure_dir(dir)?;

    let mut written = Vec::with_capacity(panels.len());
    for panel in panels {
        let path = day_file_path(dir, panel.day_number, panel.date, "svg");
        ensure_writable(&path, force)?;
        fs::write(&path, to_svg(&panel.grid))?;
        detail(path.display());
        written.push(path);
    }

    success(format!("{} SVG file(s) written to {}", written.len(), dir.display()));
    Ok(written)
}
