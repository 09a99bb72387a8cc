//! 24-hour × 4-status grid: geometry, drawing commands and backends.

pub mod commands;
pub mod geometry;
pub mod renderer;
pub mod svg;
pub mod text;

pub use commands::{DrawCommand, TextAnchor, TextBaseline};
pub use geometry::{BlockRect, CanvasSize, GridGeometry};
pub use renderer::{GridBlock, GridStyle, RenderedGrid, render};
