use crate::core::ingest::validate_timeline;
use crate::errors::AppResult;
use crate::models::{LogSheet, RawTimelineEvent, TimelineEvent};

/// Split a time-sorted timeline into one LogSheet per calendar day.
///
/// An event is filed entirely under the day of its start time, even when it
/// runs past midnight; the following day does not receive the remainder.
/// Input must already be sorted by `start_time`.
pub fn segment(events: &[TimelineEvent]) -> Vec<LogSheet> {
    let Some(first) = events.first() else {
        return Vec::new();
    };

    let mut sheets = Vec::new();
    let mut current_day = first.day();
    let mut day_events: Vec<TimelineEvent> = Vec::new();

    for ev in events {
        let event_day = ev.day();

        if event_day != current_day {
            if !day_events.is_empty() {
                sheets.push(LogSheet::new(current_day, std::mem::take(&mut day_events)));
            }
            current_day = event_day;
        }

        day_events.push(ev.clone());
    }

    if !day_events.is_empty() {
        sheets.push(LogSheet::new(current_day, day_events));
    }

    sheets
}

/// Validate raw planner events, then segment. Any malformed event fails the call.
pub fn segment_raw(raw: &[RawTimelineEvent]) -> AppResult<Vec<LogSheet>> {
    let events = validate_timeline(raw)?;
    Ok(segment(&events))
}
