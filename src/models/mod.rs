pub mod day_summary;
pub mod duty_status;
pub mod event_kind;
pub mod log_sheet;
pub mod raw_event;
pub mod timeline_event;

pub use day_summary::DaySummary;
pub use duty_status::{DutyStatus, EventStatus};
pub use event_kind::EventKind;
pub use log_sheet::LogSheet;
pub use raw_event::{RawTimelineEvent, TimelineDocument};
pub use timeline_event::{TimelineEvent, checked_end_time};
