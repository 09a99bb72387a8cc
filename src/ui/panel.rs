//! Terminal rendering of one day panel.

use crate::core::grid::text::render_text_grid;
use crate::core::logic::DayPanel;
use crate::models::TimelineEvent;
use crate::utils::colors::{RESET, color_for_hours, style_for_event};
use crate::utils::formatting::{bold, format_time};
use crate::utils::time::{format_duration_label, format_hours, format_miles};

/// Options that change how a panel is printed, not what it contains.
pub struct PanelOptions<'a> {
    pub time_format: &'a str,
    pub columns_per_hour: usize,
    pub color: bool,
}

pub fn format_panel(panel: &DayPanel, opts: &PanelOptions<'_>) -> String {
    let mut out = String::new();

    let title = format!("Daily Log Sheet - {}", panel.title());
    out.push_str(&if opts.color { bold(&title) } else { title });
    out.push('\n');
    out.push_str(&panel.formatted_date);
    out.push_str("\n\n");

    let s = &panel.summary;
    let fields = [
        ("Driving", format_hours(s.driving_time_hours), s.driving_time_hours),
        ("Distance", format_miles(s.distance_miles), s.distance_miles),
        ("On duty (all statuses)", format_hours(s.total_duty_hours), s.total_duty_hours),
    ];
    for (label, value, raw) in fields {
        if opts.color {
            out.push_str(&format!("{label:<24} {}{value}{RESET}\n", color_for_hours(raw)));
        } else {
            out.push_str(&format!("{label:<24} {value}\n"));
        }
    }
    out.push('\n');

    for line in render_text_grid(&panel.grid, opts.columns_per_hour, opts.color) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nActivity Summary:\n");
    for ev in &panel.sheet.events {
        out.push_str(&activity_line(ev, opts));
        out.push('\n');
    }

    out
}

/// `08:00 AM - Driving (4.5h) - 270.0 miles`
pub fn activity_line(ev: &TimelineEvent, opts: &PanelOptions<'_>) -> String {
    let bullet = if opts.color {
        style_for_event(&ev.status).terminal.paint("●").to_string()
    } else {
        "*".to_string()
    };

    let mut line = format!(
        "  {} {} - {}",
        bullet,
        format_time(ev.start_time, opts.time_format),
        ev.status
    );

    if let Some(loc) = &ev.location {
        line.push_str(&format!(" at {loc}"));
    }

    line.push_str(&format!(" ({})", format_duration_label(ev.duration_hours)));

    if let Some(d) = ev.distance_miles.filter(|d| *d > 0.0) {
        line.push_str(&format!(" - {:.1} miles", d));
    }

    line
}
