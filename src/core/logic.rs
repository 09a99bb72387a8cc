use crate::core::calculator::{aggregator, segmenter};
use crate::core::grid::{self, CanvasSize, GridStyle, RenderedGrid};
use crate::models::{DaySummary, LogSheet, TimelineEvent};
use crate::utils::formatting::format_date;
use chrono::NaiveDate;

/// Everything the UI shows for one day.
#[derive(Debug, Clone)]
pub struct DayPanel {
    /// 1-based position in date order, not the calendar day.
    pub day_number: usize,
    pub date: NaiveDate,
    pub formatted_date: String,
    pub summary: DaySummary,
    pub grid: RenderedGrid,
    pub sheet: LogSheet,
}

impl DayPanel {
    pub fn title(&self) -> String {
        format!("Day {}", self.day_number)
    }
}

pub struct Core;

impl Core {
    /// One panel per sheet, in the sheets' (ascending date) order.
    pub fn build_panels(
        sheets: &[LogSheet],
        canvas: CanvasSize,
        style: &GridStyle,
        date_format: &str,
    ) -> Vec<DayPanel> {
        sheets
            .iter()
            .enumerate()
            .map(|(i, sheet)| DayPanel {
                day_number: i + 1,
                date: sheet.date,
                formatted_date: format_date(sheet.date, date_format),
                summary: aggregator::summarize(sheet),
                grid: grid::render(sheet, canvas, style),
                sheet: sheet.clone(),
            })
            .collect()
    }

    /// Full recompute from a sorted timeline: segment, then summarize and render each day.
    pub fn build_daily_panels(
        events: &[TimelineEvent],
        canvas: CanvasSize,
        style: &GridStyle,
        date_format: &str,
    ) -> Vec<DayPanel> {
        let sheets = segmenter::segment(events);
        Self::build_panels(&sheets, canvas, style, date_format)
    }
}
