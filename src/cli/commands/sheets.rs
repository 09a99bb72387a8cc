use crate::cli::commands::{color_enabled, load_sheets};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::gaps::{DiscontinuityKind, find_discontinuities, midnight_crossings};
use crate::core::logic::{Core, DayPanel};
use crate::errors::AppResult;
use crate::ui::messages::{detail, header, warning};
use crate::ui::panel::{PanelOptions, format_panel};

const HOS_BANNER: &str = "HOS Rules Applied: 70-hour/8-day cycle | 11-hour driving limit | \
14-hour on-duty window | 10-hour off-duty rest | 30-min break after 8 hours";

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheets { input, details } = &cli.command {
        let sheets = load_sheets(input)?;
        if sheets.is_empty() {
            return Ok(());
        }

        let panels = Core::build_panels(&sheets, cfg.canvas(), &cfg.grid_style(), &cfg.date_format);

        header("Electronic Logging Device (ELD) Records");
        println!("{HOS_BANNER}\n");

        let opts = PanelOptions {
            time_format: &cfg.time_format,
            columns_per_hour: cfg.text_columns_per_hour,
            color: color_enabled(cfg, cli.no_color),
        };

        for panel in &panels {
            println!("{}", format_panel(panel, &opts));
            report_midnight_crossings(panel);
            if *details {
                report_discontinuities(panel);
            }
        }
    }
    Ok(())
}

/// The remainder of a midnight-crossing event is not carried into the next
/// day's sheet. Say so every time it happens.
fn report_midnight_crossings(panel: &DayPanel) {
    for crossing in midnight_crossings(&panel.sheet) {
        let ev = &panel.sheet.events[crossing.event_index];
        warning(format!(
            "{}: {} event at {} runs until {}; {:.2}h past midnight are not shown on any sheet.",
            panel.title(),
            ev.status,
            ev.time_str(),
            crossing.end_time.format("%Y-%m-%d %H:%M"),
            crossing.clipped_hours
        ));
    }
}

fn report_discontinuities(panel: &DayPanel) {
    let found = find_discontinuities(&panel.sheet.events);
    if found.is_empty() {
        detail(format!("{}: timeline is continuous.", panel.title()));
        return;
    }

    for d in found {
        let what = match d.kind {
            DiscontinuityKind::Gap => "gap",
            DiscontinuityKind::Overlap => "overlap",
        };
        detail(format!(
            "{}: {} of {} min at {} (after event #{})",
            panel.title(),
            what,
            d.minutes,
            d.at.format("%H:%M"),
            d.after_index + 1
        ));
    }
}
