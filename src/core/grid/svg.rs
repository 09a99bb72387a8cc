//! SVG backend: replays a RenderedGrid into a standalone SVG document.

use super::commands::{DrawCommand, TextAnchor, TextBaseline};
use super::renderer::RenderedGrid;
use std::fmt::Write;

const FONT: &str = "Inter, Helvetica, Arial, sans-serif";

pub fn to_svg(grid: &RenderedGrid) -> String {
    let w = grid.canvas.width;
    let h = grid.canvas.height;
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}' role='img'>"
    );

    for cmd in &grid.commands {
        write_command(&mut svg, cmd);
    }

    let _ = writeln!(svg, "</svg>");
    svg
}

fn write_command(svg: &mut String, cmd: &DrawCommand) {
    match cmd {
        // a new document is already blank
        DrawCommand::Clear { .. } => {}
        DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
            opacity,
        } => {
            let _ = write!(
                svg,
                "  <rect x='{}' y='{}' width='{}' height='{}' fill='{}'",
                num(*x),
                num(*y),
                num(*width),
                num(*height),
                color.hex()
            );
            if *opacity < 1.0 {
                let _ = write!(svg, " fill-opacity='{}'", num(*opacity));
            }
            let _ = writeln!(svg, "/>");
        }
        DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            line_width,
        } => {
            let _ = writeln!(
                svg,
                "  <rect x='{}' y='{}' width='{}' height='{}' fill='none' stroke='{}' stroke-width='{}'/>",
                num(*x),
                num(*y),
                num(*width),
                num(*height),
                color.hex(),
                num(*line_width)
            );
        }
        DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            line_width,
        } => {
            let _ = writeln!(
                svg,
                "  <line x1='{}' y1='{}' x2='{}' y2='{}' stroke='{}' stroke-width='{}'/>",
                num(*x1),
                num(*y1),
                num(*x2),
                num(*y2),
                color.hex(),
                num(*line_width)
            );
        }
        DrawCommand::Circle { cx, cy, r, color } => {
            let _ = writeln!(
                svg,
                "  <circle cx='{}' cy='{}' r='{}' fill='{}'/>",
                num(*cx),
                num(*cy),
                num(*r),
                color.hex()
            );
        }
        DrawCommand::Text {
            x,
            y,
            text,
            size,
            bold,
            color,
            anchor,
            baseline,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let baseline = match baseline {
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Middle => "middle",
            };
            let weight = if *bold { "700" } else { "400" };

            let _ = writeln!(
                svg,
                "  <text x='{}' y='{}' fill='{}' font-family='{FONT}' font-size='{}' font-weight='{weight}' text-anchor='{anchor}' dominant-baseline='{baseline}'>{}</text>",
                num(*x),
                num(*y),
                color.hex(),
                num(*size),
                escape_text(text)
            );
        }
    }
}

/// Whole numbers print without decimals, anything else with two.
fn num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}
