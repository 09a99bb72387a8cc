use serde::Serialize;

/// What the driver was doing. Descriptive only: the grid row comes from the status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Driving,
    Fuel,
    Break,
    Rest,
    Pickup,
    Dropoff,
}

impl EventKind {
    pub fn ek_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "driving" => Some(Self::Driving),
            "fuel" => Some(Self::Fuel),
            "break" => Some(Self::Break),
            "rest" => Some(Self::Rest),
            "pickup" => Some(Self::Pickup),
            "dropoff" => Some(Self::Dropoff),
            _ => None,
        }
    }

    pub fn ek_as_str(&self) -> &'static str {
        match self {
            EventKind::Driving => "driving",
            EventKind::Fuel => "fuel",
            EventKind::Break => "break",
            EventKind::Rest => "rest",
            EventKind::Pickup => "pickup",
            EventKind::Dropoff => "dropoff",
        }
    }
}
