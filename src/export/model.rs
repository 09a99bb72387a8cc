// src/export/model.rs

use crate::core::calculator::aggregator::{summarize, summarize_trip};
use crate::models::{DaySummary, LogSheet, TimelineEvent};
use serde::Serialize;

/// Flat per-event row for CSV / XLSX / PDF tables.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub day: usize,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub duration_hours: f64,
    pub distance_miles: Option<f64>,
    pub location: String,
}

/// Flat per-day totals row.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub day: usize,
    pub date: String,
    pub events: usize,
    pub driving_time_hours: f64,
    pub distance_miles: f64,
    pub total_duty_hours: f64,
}

/// One sheet in the JSON document.
#[derive(Serialize, Clone, Debug)]
pub struct SheetExport {
    pub day: usize,
    pub date: String,
    pub summary: DaySummary,
    pub events: Vec<TimelineEvent>,
}

/// Whole JSON document: every sheet plus trip totals.
#[derive(Serialize, Clone, Debug)]
pub struct TimelineExport {
    pub days: usize,
    pub totals: DaySummary,
    pub sheets: Vec<SheetExport>,
}

impl EventExport {
    pub fn from_event(day: usize, ev: &TimelineEvent) -> Self {
        Self {
            day,
            date: ev.date_str(),
            start_time: ev.start_time.format("%Y-%m-%d %H:%M").to_string(),
            end_time: ev.end_time().format("%Y-%m-%d %H:%M").to_string(),
            kind: ev.kind.ek_as_str().to_string(),
            status: ev.status.to_string(),
            duration_hours: ev.duration_hours,
            distance_miles: ev.distance_miles,
            location: ev.location.clone().unwrap_or_default(),
        }
    }
}

impl SummaryExport {
    pub fn from_sheet(day: usize, sheet: &LogSheet) -> Self {
        let s = summarize(sheet);
        Self {
            day,
            date: sheet.date_str(),
            events: sheet.events.len(),
            driving_time_hours: s.driving_time_hours,
            distance_miles: s.distance_miles,
            total_duty_hours: s.total_duty_hours,
        }
    }
}

impl TimelineExport {
    pub fn from_sheets(sheets: &[LogSheet]) -> Self {
        Self {
            days: sheets.len(),
            totals: summarize_trip(sheets),
            sheets: sheets
                .iter()
                .enumerate()
                .map(|(i, sheet)| SheetExport {
                    day: i + 1,
                    date: sheet.date_str(),
                    summary: summarize(sheet),
                    events: sheet.events.clone(),
                })
                .collect(),
        }
    }
}

pub(crate) fn events_to_rows(sheets: &[LogSheet]) -> Vec<EventExport> {
    sheets
        .iter()
        .enumerate()
        .flat_map(|(i, sheet)| sheet.events.iter().map(move |ev| EventExport::from_event(i + 1, ev)))
        .collect()
}

pub(crate) fn summaries_to_rows(sheets: &[LogSheet]) -> Vec<SummaryExport> {
    sheets
        .iter()
        .enumerate()
        .map(|(i, sheet)| SummaryExport::from_sheet(i + 1, sheet))
        .collect()
}

/// Header for the event table (CSV / XLSX / PDF)
pub(crate) fn event_headers() -> Vec<&'static str> {
    vec![
        "day",
        "date",
        "start_time",
        "end_time",
        "type",
        "status",
        "duration_hours",
        "distance_miles",
        "location",
    ]
}

pub(crate) fn summary_headers() -> Vec<&'static str> {
    vec![
        "day",
        "date",
        "events",
        "driving_time_hours",
        "distance_miles",
        "total_duty_hours",
    ]
}

pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.day.to_string(),
        e.date.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.kind.clone(),
        e.status.clone(),
        e.duration_hours.to_string(),
        e.distance_miles.map(|d| d.to_string()).unwrap_or_default(),
        e.location.clone(),
    ]
}

pub(crate) fn summary_to_row(s: &SummaryExport) -> Vec<String> {
    vec![
        s.day.to_string(),
        s.date.clone(),
        s.events.to_string(),
        s.driving_time_hours.to_string(),
        s.distance_miles.to_string(),
        s.total_duty_hours.to_string(),
    ]
}
