//! Path utilities: expand ~, validate output paths, build per-day file names.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Output files must be given as absolute paths (after `~` expansion).
pub fn require_absolute(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Err(AppError::from(io::Error::other(format!(
            "Output path must be absolute: {path}"
        ))))
    }
}

/// `day-01_2024-10-30.svg`
pub fn day_file_name(day_number: usize, date: NaiveDate, ext: &str) -> String {
    format!("day-{:02}_{}.{}", day_number, date.format("%Y-%m-%d"), ext)
}

pub fn day_file_path(dir: &Path, day_number: usize, date: NaiveDate, ext: &str) -> PathBuf {
    dir.join(day_file_name(day_number, date, ext))
}
