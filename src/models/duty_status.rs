use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The four regulatory duty statuses, in grid row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    /// All statuses, ordered by grid row.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Fixed grid row (0 = top).
    pub fn row(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDutyNotDriving => 3,
        }
    }

    /// Label used on the wire by the trip planner.
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }

    /// Upper-case label printed at the left of a grid row.
    pub fn row_label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF DUTY",
            DutyStatus::SleeperBerth => "SLEEPER",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDutyNotDriving => "ON DUTY",
        }
    }

    pub fn legend_label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty",
        }
    }

    /// Convert wire label → enum (exact match, as sent by the planner)
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Off Duty" => Some(DutyStatus::OffDuty),
            "Sleeper Berth" => Some(DutyStatus::SleeperBerth),
            "Driving" => Some(DutyStatus::Driving),
            "On Duty (Not Driving)" => Some(DutyStatus::OnDutyNotDriving),
            _ => None,
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status as carried by an event.
///
/// Labels outside the four known statuses are kept verbatim instead of being
/// rejected: the grid draws them on row 0 with the fallback color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStatus {
    Known(DutyStatus),
    Unrecognized(String),
}

impl EventStatus {
    pub fn from_label(s: &str) -> Self {
        match DutyStatus::from_label(s) {
            Some(status) => EventStatus::Known(status),
            None => EventStatus::Unrecognized(s.to_string()),
        }
    }

    pub fn duty(&self) -> Option<DutyStatus> {
        match self {
            EventStatus::Known(status) => Some(*status),
            EventStatus::Unrecognized(_) => None,
        }
    }

    /// Grid row; unrecognized labels fall back to row 0.
    pub fn row(&self) -> usize {
        self.duty().map(|s| s.row()).unwrap_or(0)
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, EventStatus::Known(DutyStatus::Driving))
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Known(status) => status.as_str(),
            EventStatus::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl From<DutyStatus> for EventStatus {
    fn from(status: DutyStatus) -> Self {
        EventStatus::Known(status)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EventStatus::from_label(&raw))
    }
}
