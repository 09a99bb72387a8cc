mod common;
use common::{date, driving, first_day_events, off_duty, on_duty};
use eldlog::core::grid::svg::to_svg;
use eldlog::core::grid::text::render_text_grid;
use eldlog::core::grid::{CanvasSize, DrawCommand, GridStyle, render};
use eldlog::models::{EventKind, EventStatus, LogSheet, TimelineEvent};
use eldlog::utils::colors::{FALLBACK, Rgb};

fn sheet(events: Vec<TimelineEvent>) -> LogSheet {
    LogSheet::new(date("2024-10-30"), events)
}

fn texts(commands: &[DrawCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn circles(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { .. }))
        .count()
}

#[test]
fn test_render_is_idempotent() {
    let s = sheet(first_day_events());
    let a = render(&s, CanvasSize::default(), &GridStyle::default());
    let b = render(&s, CanvasSize::default(), &GridStyle::default());

    assert_eq!(a, b);
    assert_eq!(a.rects(), b.rects());
}

#[test]
fn test_first_command_clears_the_surface() {
    let g = render(&sheet(first_day_events()), CanvasSize::new(800, 240), &GridStyle::default());

    assert_eq!(
        g.commands.first(),
        Some(&DrawCommand::Clear {
            width: 800,
            height: 240
        })
    );
}

#[test]
fn test_block_geometry_on_default_canvas() {
    let g = render(&sheet(first_day_events()), CanvasSize::default(), &GridStyle::default());
    let first = &g.blocks[0];

    // 1000 px / 24 h, 320 px / 4 rows, 4 px margin
    assert_eq!(first.row, 2);
    assert_eq!(first.rect.x, 333);
    assert_eq!(first.rect.y, 164.0);
    assert_eq!(first.rect.height, 72.0);
    assert!(!first.clipped);
}

#[test]
fn test_rows_follow_status() {
    let events = vec![
        off_duty("2024-10-30 00:00", 6.0),
        TimelineEvent::new(
            EventKind::Rest,
            common::ts("2024-10-30 06:00"),
            2.0,
            EventStatus::from_label("Sleeper Berth"),
        ),
        driving("2024-10-30 08:00", 2.0, 100.0),
        on_duty(EventKind::Pickup, "2024-10-30 10:00", 1.0),
    ];
    let g = render(&sheet(events), CanvasSize::default(), &GridStyle::default());

    let rows: Vec<usize> = g.blocks.iter().map(|b| b.row).collect();
    assert_eq!(rows, vec![0, 1, 2, 3]);
}

#[test]
fn test_touching_blocks_round_edges_independently() {
    let g = render(
        &sheet(vec![off_duty("2024-10-30 01:00", 1.0), off_duty("2024-10-30 02:00", 1.0)]),
        CanvasSize::default(),
        &GridStyle::default(),
    );
    let (a, b) = (&g.blocks[0].rect, &g.blocks[1].rect);

    assert_eq!((a.x, a.width), (42, 42));
    assert_eq!(b.x, 83);
    assert!((a.x + a.width).abs_diff(b.x) <= 1);
}

#[test]
fn test_event_past_midnight_is_clipped_at_hour_24() {
    let g = render(
        &sheet(vec![off_duty("2024-10-30 23:30", 2.0)]),
        CanvasSize::default(),
        &GridStyle::default(),
    );
    let block = &g.blocks[0];

    assert_eq!(block.end_hour, 24.0);
    assert!(block.clipped);
    assert_eq!(block.rect.x, 979);
    assert_eq!(block.rect.width, 21);
    assert!(block.rect.x + block.rect.width <= 1000);
}

#[test]
fn test_blocks_drawn_in_start_time_order() {
    let events = vec![
        driving("2024-10-30 13:00", 1.0, 60.0),
        driving("2024-10-30 08:00", 4.5, 270.0),
    ];
    let g = render(&sheet(events), CanvasSize::default(), &GridStyle::default());

    assert_eq!(g.blocks[0].event_index, 1);
    assert_eq!(g.blocks[1].event_index, 0);
    assert!(g.blocks[0].rect.x < g.blocks[1].rect.x);
}

#[test]
fn test_unknown_status_uses_row_zero_and_fallback_color() {
    let ev = TimelineEvent::new(
        EventKind::Break,
        common::ts("2024-10-30 10:00"),
        1.0,
        EventStatus::from_label("Yard Move"),
    );
    let g = render(&sheet(vec![ev]), CanvasSize::default(), &GridStyle::default());

    assert_eq!(g.blocks[0].row, 0);
    assert_eq!(g.blocks[0].fill, FALLBACK.fill);
    assert_eq!(g.blocks[0].fill, Rgb(0xd1, 0xd5, 0xdb));
    // row labels come from the fixed table, never from the event
    assert!(!texts(&g.commands).contains(&"Yard Move"));
}

#[test]
fn test_empty_sheet_draws_the_bare_grid() {
    let g = render(&sheet(Vec::new()), CanvasSize::default(), &GridStyle::default());
    let labels = texts(&g.commands);

    assert!(g.blocks.is_empty());
    assert!(matches!(g.commands[0], DrawCommand::Clear { .. }));
    assert!(labels.contains(&"00:00"));
    assert!(labels.contains(&"23:00"));
    assert!(labels.contains(&"OFF DUTY"));
    assert!(labels.contains(&"ON DUTY"));
    assert!(labels.contains(&"Legend"));
    assert_eq!(circles(&g.commands), 0);
}

#[test]
fn test_duration_label_only_in_wide_blocks() {
    let g = render(&sheet(first_day_events()), CanvasSize::default(), &GridStyle::default());
    let labels = texts(&g.commands);

    assert!(labels.contains(&"4.5h"));
    assert!(!labels.contains(&"0.5h"));
}

#[test]
fn test_markers_only_on_status_change() {
    let same_status = vec![
        driving("2024-10-30 08:00", 2.0, 110.0),
        driving("2024-10-30 10:00", 2.0, 110.0),
    ];
    let g = render(&sheet(same_status), CanvasSize::default(), &GridStyle::default());
    assert_eq!(circles(&g.commands), 1);

    let g = render(&sheet(first_day_events()), CanvasSize::default(), &GridStyle::default());
    assert_eq!(circles(&g.commands), 3);
    assert!(texts(&g.commands).contains(&"12:30"));

    let quiet = GridStyle {
        show_markers: false,
        ..GridStyle::default()
    };
    let g = render(&sheet(first_day_events()), CanvasSize::default(), &quiet);
    assert_eq!(circles(&g.commands), 0);
}

#[test]
fn test_svg_document() {
    let g = render(&sheet(first_day_events()), CanvasSize::default(), &GridStyle::default());
    let svg = to_svg(&g);

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("width='1000'"));
    assert!(svg.contains("#10b981"));
    assert!(svg.contains("DRIVING"));
}

#[test]
fn test_text_grid_cells() {
    let g = render(&sheet(first_day_events()), CanvasSize::default(), &GridStyle::default());
    let lines = render_text_grid(&g, 1, false);

    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("00"));
    assert!(lines[0].contains("18"));

    let driving_row = format!("DRIVING  {}{}{}{}{}", "·".repeat(8), "█".repeat(4), "·", "█", "·".repeat(10));
    assert_eq!(lines[3], driving_row);

    let on_duty_row = format!("ON DUTY  {}█{}", "·".repeat(12), "·".repeat(11));
    assert_eq!(lines[4], on_duty_row);

    assert_eq!(lines[1], format!("OFF DUTY {}", "·".repeat(24)));
}
