//! Boundary between the trip planner's JSON and the typed timeline.
//!
//! Every data error found here fails the whole load: a dropped event would
//! shift day buckets and silently corrupt the log sheets.

use crate::errors::{AppError, AppResult};
use crate::models::{
    EventKind, EventStatus, RawTimelineEvent, TimelineDocument, TimelineEvent, checked_end_time,
};
use crate::utils::time::parse_timestamp;
use std::fs;
use std::path::Path;

/// Validate one raw event. `index` is its position in the input (for messages).
pub fn validate_event(index: usize, raw: &RawTimelineEvent) -> AppResult<TimelineEvent> {
    let start_time =
        parse_timestamp(&raw.start_time).ok_or_else(|| AppError::InvalidTimestamp {
            index,
            value: raw.start_time.clone(),
        })?;

    // the end time must also exist, or every later date computation would overflow
    if !raw.duration.is_finite()
        || raw.duration <= 0.0
        || checked_end_time(start_time, raw.duration).is_none()
    {
        return Err(AppError::InvalidDuration {
            index,
            value: raw.duration,
        });
    }

    if let Some(d) = raw.distance
        && (!d.is_finite() || d < 0.0)
    {
        return Err(AppError::InvalidDistance { index, value: d });
    }

    let kind = EventKind::ek_from_str(&raw.kind).ok_or_else(|| AppError::InvalidEventKind {
        index,
        value: raw.kind.clone(),
    })?;

    Ok(TimelineEvent {
        kind,
        start_time,
        duration_hours: raw.duration,
        distance_miles: raw.distance,
        location: raw
            .location
            .as_ref()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()),
        status: EventStatus::from_label(raw.status.trim()),
    })
}

/// Validate a whole raw timeline, stopping at the first bad event.
pub fn validate_timeline(raw: &[RawTimelineEvent]) -> AppResult<Vec<TimelineEvent>> {
    raw.iter()
        .enumerate()
        .map(|(i, ev)| validate_event(i, ev))
        .collect()
}

pub fn parse_timeline_str(json: &str) -> AppResult<Vec<TimelineEvent>> {
    let doc: TimelineDocument = serde_json::from_str(json)?;
    validate_timeline(&doc.into_events())
}

pub fn load_timeline(path: &Path) -> AppResult<Vec<TimelineEvent>> {
    let content = fs::read_to_string(path)?;
    parse_timeline_str(&content)
}

/// Stable-sort by start time. Returns true if the input was already ordered.
pub fn sort_by_start(events: &mut [TimelineEvent]) -> bool {
    let ordered = events.windows(2).all(|w| w[0].start_time <= w[1].start_time);
    if !ordered {
        events.sort_by_key(|e| e.start_time);
    }
    ordered
}
