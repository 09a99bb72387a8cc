use super::commands::{DrawCommand, TextAnchor, TextBaseline};
use super::geometry::{BlockRect, CanvasSize, GridGeometry, HOURS_PER_DAY, STATUS_ROWS};
use crate::models::{DutyStatus, EventStatus, LogSheet, TimelineEvent};
use crate::utils::colors::{Rgb, style_for, style_for_event};
use crate::utils::time::format_duration_label;

const BACKGROUND: Rgb = Rgb(0xf9, 0xfa, 0xfb);
const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
const LINE_MAJOR: Rgb = Rgb(0xd1, 0xd5, 0xdb);
const LINE_MINOR: Rgb = Rgb(0xe5, 0xe7, 0xeb);
const TEXT_DARK: Rgb = Rgb(0x1f, 0x29, 0x37);
const TEXT_MAJOR: Rgb = Rgb(0x37, 0x41, 0x51);
const TEXT_MINOR: Rgb = Rgb(0x6b, 0x72, 0x80);
const TEXT_LEGEND: Rgb = Rgb(0x4b, 0x55, 0x63);
const LEGEND_SWATCH_BORDER: Rgb = Rgb(0x9c, 0xa3, 0xaf);

/// Height reserved at the bottom for the hour labels.
const LABEL_BAND: f64 = 30.0;
const MAJOR_TICK_EVERY: usize = 6;
const LEGEND_WIDTH: f64 = 150.0;
const LEGEND_HEIGHT: f64 = 90.0;

/// Cosmetic knobs. None of them moves a block.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    /// Vertical inset of a block inside its status row.
    pub block_margin: f64,
    /// Blocks wider than this get their duration written inside.
    pub min_label_width: i64,
    pub show_markers: bool,
    pub show_legend: bool,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            block_margin: 4.0,
            min_label_width: 40,
            show_markers: true,
            show_legend: true,
        }
    }
}

/// One event as placed on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBlock {
    /// Position of the event in the sheet's `events`.
    pub event_index: usize,
    pub status: EventStatus,
    pub row: usize,
    pub start_hour: f64,
    pub end_hour: f64,
    pub rect: BlockRect,
    pub fill: Rgb,
    pub border: Rgb,
    /// The event runs past midnight and was cut at hour 24.
    pub clipped: bool,
}

/// Output of one render: the placed blocks plus the full command list.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGrid {
    pub canvas: CanvasSize,
    pub blocks: Vec<GridBlock>,
    pub commands: Vec<DrawCommand>,
}

impl RenderedGrid {
    pub fn rects(&self) -> Vec<BlockRect> {
        self.blocks.iter().map(|b| b.rect).collect()
    }
}

/// Render one log sheet as a 24 × 4 duty-status grid.
///
/// Events are drawn in ascending start-time order whatever their order in the
/// sheet. The command list starts with a full `Clear`, so replaying it onto a
/// used surface never leaves stale pixels behind.
pub fn render(sheet: &LogSheet, canvas: CanvasSize, style: &GridStyle) -> RenderedGrid {
    let geo = GridGeometry::new(canvas, style.block_margin);

    let mut commands = vec![
        DrawCommand::Clear {
            width: canvas.width,
            height: canvas.height,
        },
        DrawCommand::fill(0.0, 0.0, geo.width, geo.height, BACKGROUND),
    ];

    draw_hour_columns(&geo, &mut commands);
    draw_status_rows(&geo, &mut commands);

    let blocks = place_blocks(&sheet.events, &geo);
    draw_blocks(&blocks, &sheet.events, style, &mut commands);

    if style.show_legend {
        draw_legend(&geo, &mut commands);
    }

    RenderedGrid {
        canvas,
        blocks,
        commands,
    }
}

/// Stable ordering by start time; ties keep their sheet order.
fn draw_order(events: &[TimelineEvent]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&i| events[i].start_time);
    order
}

fn place_blocks(events: &[TimelineEvent], geo: &GridGeometry) -> Vec<GridBlock> {
    draw_order(events)
        .into_iter()
        .map(|i| {
            let ev = &events[i];
            let row = ev.status.row();
            let start_hour = ev.start_hour();
            let (end_hour, rect) = geo.place(start_hour, ev.duration_hours, row);
            let palette = style_for_event(&ev.status);

            GridBlock {
                event_index: i,
                status: ev.status.clone(),
                row,
                start_hour,
                end_hour,
                rect,
                fill: palette.fill,
                border: palette.border,
                clipped: ev.midnight_overrun().is_some(),
            }
        })
        .collect()
}

fn draw_hour_columns(geo: &GridGeometry, out: &mut Vec<DrawCommand>) {
    let hours = HOURS_PER_DAY as usize;

    for i in 0..=hours {
        let x = geo.hour_x(i as f64);
        let major = i % MAJOR_TICK_EVERY == 0;

        out.push(DrawCommand::Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: geo.height - LABEL_BAND,
            color: if major { LINE_MAJOR } else { LINE_MINOR },
            line_width: if major { 1.5 } else { 0.5 },
        });

        if i < hours {
            out.push(
                DrawCommand::text(
                    x + geo.hour_width / 2.0,
                    geo.height - 10.0,
                    format!("{:02}:00", i),
                    if major { 11.0 } else { 10.0 },
                    if major { TEXT_MAJOR } else { TEXT_MINOR },
                )
                .bold(major)
                .anchored(TextAnchor::Middle, TextBaseline::Alphabetic),
            );
        }
    }
}

fn draw_status_rows(geo: &GridGeometry, out: &mut Vec<DrawCommand>) {
    for i in 0..=STATUS_ROWS {
        let y = geo.row_y(i);

        out.push(DrawCommand::Line {
            x1: 0.0,
            y1: y,
            x2: geo.width,
            y2: y,
            color: LINE_MAJOR,
            line_width: 1.5,
        });

        if let Some(status) = DutyStatus::ALL.get(i) {
            let label_y = y + geo.row_height / 2.0;

            out.push(DrawCommand::fill(5.0, label_y - 10.0, 90.0, 20.0, WHITE));
            out.push(
                DrawCommand::text(10.0, label_y, status.row_label(), 11.0, TEXT_DARK)
                    .bold(true)
                    .anchored(TextAnchor::Start, TextBaseline::Middle),
            );
        }
    }
}

fn draw_blocks(
    blocks: &[GridBlock],
    events: &[TimelineEvent],
    style: &GridStyle,
    out: &mut Vec<DrawCommand>,
) {
    let mut previous: Option<&EventStatus> = None;

    for block in blocks {
        let ev = &events[block.event_index];
        let r = block.rect;
        let (x, w) = (r.x as f64, r.width as f64);

        out.push(DrawCommand::fill(x, r.y, w, r.height, block.fill));
        out.push(DrawCommand::StrokeRect {
            x,
            y: r.y,
            width: w,
            height: r.height,
            color: block.border,
            line_width: 2.0,
        });

        if r.width > style.min_label_width {
            out.push(
                DrawCommand::text(
                    x + w / 2.0,
                    r.y + r.height / 2.0,
                    format_duration_label(ev.duration_hours),
                    11.0,
                    WHITE,
                )
                .bold(true)
                .anchored(TextAnchor::Middle, TextBaseline::Middle),
            );
        }

        let status_changed = previous != Some(&block.status);
        if style.show_markers && status_changed {
            out.push(DrawCommand::Circle {
                cx: x,
                cy: r.y + r.height / 2.0,
                r: 4.0,
                color: block.border,
            });
            out.push(
                DrawCommand::text(x, (r.y - 8.0).max(10.0), ev.time_str(), 10.0, TEXT_DARK)
                    .bold(true)
                    .anchored(TextAnchor::Middle, TextBaseline::Alphabetic),
            );
        }

        previous = Some(&block.status);
    }
}

fn draw_legend(geo: &GridGeometry, out: &mut Vec<DrawCommand>) {
    let lx = geo.width - 160.0;
    let ly = 10.0;

    out.push(DrawCommand::FillRect {
        x: lx,
        y: ly,
        width: LEGEND_WIDTH,
        height: LEGEND_HEIGHT,
        color: WHITE,
        opacity: 0.95,
    });
    out.push(DrawCommand::StrokeRect {
        x: lx,
        y: ly,
        width: LEGEND_WIDTH,
        height: LEGEND_HEIGHT,
        color: LINE_MAJOR,
        line_width: 1.0,
    });
    out.push(DrawCommand::text(lx + 10.0, ly + 15.0, "Legend", 11.0, TEXT_DARK).bold(true));

    for (i, status) in DutyStatus::ALL.iter().enumerate() {
        let item_y = ly + 30.0 + i as f64 * 15.0;

        out.push(DrawCommand::fill(
            lx + 10.0,
            item_y - 5.0,
            15.0,
            10.0,
            style_for(*status).fill,
        ));
        out.push(DrawCommand::StrokeRect {
            x: lx + 10.0,
            y: item_y - 5.0,
            width: 15.0,
            height: 10.0,
            color: LEGEND_SWATCH_BORDER,
            line_width: 1.0,
        });
        out.push(DrawCommand::text(
            lx + 30.0,
            item_y + 2.0,
            status.legend_label(),
            10.0,
            TEXT_LEGEND,
        ));
    }
}
