use super::timeline_event::TimelineEvent;
use chrono::NaiveDate;
use serde::Serialize;

/// One calendar day's duty-status record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogSheet {
    pub date: NaiveDate,
    pub events: Vec<TimelineEvent>,
}

impl LogSheet {
    pub fn new(date: NaiveDate, events: Vec<TimelineEvent>) -> Self {
        Self { date, events }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
