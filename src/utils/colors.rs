//! Color helpers: the fixed status palette shared by every grid backend,
//! plus ANSI codes for terminal output.
use crate::models::{DutyStatus, EventStatus};
use ansi_term::Colour;

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Components in 0.0..=1.0, as PDF operators want them.
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

/// Visual attributes of one status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusStyle {
    pub fill: Rgb,
    pub border: Rgb,
    pub terminal: Colour,
}

const OFF_DUTY: StatusStyle = StatusStyle {
    fill: Rgb(0x9c, 0xa3, 0xaf),
    border: Rgb(0x6b, 0x72, 0x80),
    terminal: Colour::White,
};

const SLEEPER_BERTH: StatusStyle = StatusStyle {
    fill: Rgb(0x3b, 0x82, 0xf6),
    border: Rgb(0x25, 0x63, 0xeb),
    terminal: Colour::Blue,
};

const DRIVING: StatusStyle = StatusStyle {
    fill: Rgb(0x10, 0xb9, 0x81),
    border: Rgb(0x05, 0x96, 0x69),
    terminal: Colour::Green,
};

const ON_DUTY: StatusStyle = StatusStyle {
    fill: Rgb(0xf5, 0x9e, 0x0b),
    border: Rgb(0xd9, 0x77, 0x06),
    terminal: Colour::Yellow,
};

/// Used for any status label outside the four known ones.
pub const FALLBACK: StatusStyle = StatusStyle {
    fill: Rgb(0xd1, 0xd5, 0xdb),
    border: Rgb(0x6b, 0x72, 0x80),
    terminal: Colour::Fixed(245),
};

pub fn style_for(status: DutyStatus) -> StatusStyle {
    match status {
        DutyStatus::OffDuty => OFF_DUTY,
        DutyStatus::SleeperBerth => SLEEPER_BERTH,
        DutyStatus::Driving => DRIVING,
        DutyStatus::OnDutyNotDriving => ON_DUTY,
    }
}

pub fn style_for_event(status: &EventStatus) -> StatusStyle {
    status.duty().map(style_for).unwrap_or(FALLBACK)
}

/// Returns GREY for a zero value and RESET otherwise.
pub fn color_for_hours(hours: f64) -> &'static str {
    if hours.abs() < f64::EPSILON { GREY } else { RESET }
}
