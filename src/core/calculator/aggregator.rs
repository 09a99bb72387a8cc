use crate::models::{DaySummary, LogSheet, TimelineEvent};

/// Reduce one day's events to its summary numbers.
pub fn summarize(sheet: &LogSheet) -> DaySummary {
    summarize_events(&sheet.events)
}

pub fn summarize_events(events: &[TimelineEvent]) -> DaySummary {
    events.iter().fold(DaySummary::default(), |mut acc, ev| {
        acc.total_duty_hours += ev.duration_hours;

        if ev.status.is_driving() {
            acc.driving_time_hours += ev.duration_hours;
            acc.distance_miles += ev.miles();
        }

        acc
    })
}

/// Totals across every sheet of a trip.
pub fn summarize_trip(sheets: &[LogSheet]) -> DaySummary {
    sheets
        .iter()
        .map(summarize)
        .fold(DaySummary::default(), |acc, day| DaySummary {
            driving_time_hours: acc.driving_time_hours + day.driving_time_hours,
            distance_miles: acc.distance_miles + day.distance_miles,
            total_duty_hours: acc.total_duty_hours + day.total_duty_hours,
        })
}
