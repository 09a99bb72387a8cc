use serde::Serialize;

/// Totals for one log sheet (or a whole trip). Derived, never stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct DaySummary {
    pub driving_time_hours: f64,
    pub distance_miles: f64,
    pub total_duty_hours: f64,
}
