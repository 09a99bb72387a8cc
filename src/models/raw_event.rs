use serde::Deserialize;

/// Event exactly as delivered by the trip planner, before validation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawTimelineEvent {
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub start_time: String,
    pub duration: f64,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    pub status: String,
}

/// Input document: either the planner's full trip result or a bare event list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TimelineDocument {
    Trip { timeline: Vec<RawTimelineEvent> },
    Events(Vec<RawTimelineEvent>),
}

impl TimelineDocument {
    pub fn into_events(self) -> Vec<RawTimelineEvent> {
        match self {
            TimelineDocument::Trip { timeline } => timeline,
            TimelineDocument::Events(events) => events,
        }
    }
}
