use crate::utils::colors::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

/// Backend-neutral drawing instruction, in canvas pixels (origin top-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface. Always the first command of a grid.
    Clear { width: u32, height: u32 },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
        opacity: f64,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
        line_width: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgb,
        line_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        color: Rgb,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        bold: bool,
        color: Rgb,
        anchor: TextAnchor,
        baseline: TextBaseline,
    },
}

impl DrawCommand {
    pub fn fill(x: f64, y: f64, width: f64, height: f64, color: Rgb) -> Self {
        DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
            opacity: 1.0,
        }
    }

    pub fn text(x: f64, y: f64, text: impl Into<String>, size: f64, color: Rgb) -> Self {
        DrawCommand::Text {
            x,
            y,
            text: text.into(),
            size,
            bold: false,
            color,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
        }
    }

    pub fn bold(mut self, on: bool) -> Self {
        if let DrawCommand::Text { bold, .. } = &mut self {
            *bold = on;
        }
        self
    }

    pub fn anchored(mut self, a: TextAnchor, b: TextBaseline) -> Self {
        if let DrawCommand::Text {
            anchor, baseline, ..
        } = &mut self
        {
            *anchor = a;
            *baseline = b;
        }
        self
    }
}
