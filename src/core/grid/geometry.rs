//! Time-to-pixel geometry of the 24 hour × 4 status grid.

use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const STATUS_ROWS: usize = 4;

/// Size of the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(1000, 320)
    }
}

/// Rectangle of one status block. `x` and `width` are whole pixels, rounded
/// separately, so the edges of two touching blocks may still be 1 px apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockRect {
    pub x: i64,
    pub y: f64,
    pub width: i64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub width: f64,
    pub height: f64,
    pub hour_width: f64,
    pub row_height: f64,
    pub margin: f64,
}

impl GridGeometry {
    pub fn new(canvas: CanvasSize, margin: f64) -> Self {
        let width = canvas.width as f64;
        let height = canvas.height as f64;

        Self {
            width,
            height,
            hour_width: width / HOURS_PER_DAY,
            row_height: height / STATUS_ROWS as f64,
            margin,
        }
    }

    pub fn hour_x(&self, hour: f64) -> f64 {
        hour * self.hour_width
    }

    pub fn row_y(&self, row: usize) -> f64 {
        row as f64 * self.row_height
    }

    /// Place a block starting at `start_hour` lasting `duration_hours` on `row`.
    /// Returns the (clipped) end hour and the pixel rect.
    pub fn place(&self, start_hour: f64, duration_hours: f64, row: usize) -> (f64, BlockRect) {
        let end_hour = clip_end_hour(start_hour, duration_hours);

        let rect = BlockRect {
            x: (start_hour * self.hour_width).round() as i64,
            y: self.row_y(row) + self.margin,
            width: ((end_hour - start_hour) * self.hour_width).round() as i64,
            height: self.row_height - 2.0 * self.margin,
        };

        (end_hour, rect)
    }
}

/// End hour of an event within its own day; anything past midnight is cut off.
pub fn clip_end_hour(start_hour: f64, duration_hours: f64) -> f64 {
    (start_hour + duration_hours).min(HOURS_PER_DAY)
}
