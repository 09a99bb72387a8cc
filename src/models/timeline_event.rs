use super::{duty_status::EventStatus, event_kind::EventKind};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::Serialize;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// One contiguous, single-status activity segment.
///
/// Built once by the ingest layer and never mutated afterwards. Field names on
/// the wire follow the trip planner (`type`, `duration`, `distance`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub start_time: NaiveDateTime,
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    #[serde(rename = "distance", skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: EventStatus,
}

impl TimelineEvent {
    pub fn new(
        kind: EventKind,
        start_time: NaiveDateTime,
        duration_hours: f64,
        status: impl Into<EventStatus>,
    ) -> Self {
        Self {
            kind,
            start_time,
            duration_hours,
            distance_miles: None,
            location: None,
            status: status.into(),
        }
    }

    pub fn with_distance(mut self, miles: f64) -> Self {
        self.distance_miles = Some(miles);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Midnight-floor of the start time: the day this event is filed under.
    pub fn day(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Ingest rejects durations that leave the calendar; a hand-built event
    /// that does so saturates at `NaiveDateTime::MAX`.
    pub fn end_time(&self) -> NaiveDateTime {
        checked_end_time(self.start_time, self.duration_hours).unwrap_or(NaiveDateTime::MAX)
    }

    /// How far the event runs past the midnight that closes its own day.
    pub fn midnight_overrun(&self) -> Option<TimeDelta> {
        let next_midnight = self.day().succ_opt()?.and_hms_opt(0, 0, 0)?;
        let end = self.end_time();
        (end > next_midnight).then(|| end - next_midnight)
    }

    /// Fractional hour of day at which the event starts (seconds ignored).
    pub fn start_hour(&self) -> f64 {
        self.start_time.hour() as f64 + self.start_time.minute() as f64 / 60.0
    }

    /// Distance if present, 0 otherwise.
    pub fn miles(&self) -> f64 {
        self.distance_miles.unwrap_or(0.0)
    }

    pub fn time_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn date_str(&self) -> String {
        self.start_time.format("%Y-%m-%d").to_string()
    }
}

/// `start + hours`, or None when the result is outside chrono's range.
pub fn checked_end_time(start: NaiveDateTime, hours: f64) -> Option<NaiveDateTime> {
    let millis = (hours * MILLIS_PER_HOUR).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64).and_then(|d| start.checked_add_signed(d))
}
