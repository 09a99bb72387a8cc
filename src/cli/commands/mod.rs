pub mod config;
pub mod export;
pub mod init;
pub mod render;
pub mod sheets;
pub mod summary;

use crate::config::Config;
use crate::core::calculator::segmenter::segment;
use crate::core::ingest::{load_timeline, sort_by_start};
use crate::errors::AppResult;
use crate::models::LogSheet;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Shared front half of every data command: read, validate, order, segment.
pub(crate) fn load_sheets(input: &str) -> AppResult<Vec<LogSheet>> {
    let path = expand_tilde(input);
    let mut events = load_timeline(&path)?;

    if !sort_by_start(&mut events) {
        warning("Timeline was not in chronological order; events have been sorted by start_time.");
    }

    let sheets = segment(&events);
    if sheets.is_empty() {
        info(format!("No events in {}: nothing to show.", path.display()));
    }

    Ok(sheets)
}

pub(crate) fn color_enabled(cfg: &Config, no_color: bool) -> bool {
    cfg.color_output && !no_color
}
