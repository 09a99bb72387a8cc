//! Module responsible for spotting holes and overlaps between consecutive
//! events, and events that run past the end of their log sheet's day.
//! Findings are informational: they never change segmentation or rendering.

use crate::models::{LogSheet, TimelineEvent};
use chrono::{Duration, NaiveDateTime};

/// Differences up to this many seconds are treated as float noise.
const TOLERANCE_SECONDS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscontinuityKind {
    Gap,
    Overlap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Discontinuity {
    /// Index of the earlier event of the pair.
    pub after_index: usize,
    pub kind: DiscontinuityKind,
    pub at: NaiveDateTime,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MidnightCrossing {
    pub event_index: usize,
    pub end_time: NaiveDateTime,
    /// Hours past midnight that the day's grid cannot show.
    pub clipped_hours: f64,
}

pub fn find_discontinuities(events: &[TimelineEvent]) -> Vec<Discontinuity> {
    let mut out = Vec::new();

    for (i, w) in events.windows(2).enumerate() {
        let prev_end = w[0].end_time();
        let next_start = w[1].start_time;
        let delta = next_start - prev_end;

        if delta > Duration::seconds(TOLERANCE_SECONDS) {
            out.push(Discontinuity {
                after_index: i,
                kind: DiscontinuityKind::Gap,
                at: prev_end,
                minutes: delta.num_minutes(),
            });
        } else if delta < Duration::seconds(-TOLERANCE_SECONDS) {
            out.push(Discontinuity {
                after_index: i,
                kind: DiscontinuityKind::Overlap,
                at: next_start,
                minutes: -delta.num_minutes(),
            });
        }
    }

    out
}

pub fn midnight_crossings(sheet: &LogSheet) -> Vec<MidnightCrossing> {
    sheet
        .events
        .iter()
        .enumerate()
        .filter_map(|(i, ev)| {
            ev.midnight_overrun().map(|over| MidnightCrossing {
                event_index: i,
                end_time: ev.end_time(),
                clipped_hours: over.num_seconds() as f64 / 3600.0,
            })
        })
        .collect()
}
