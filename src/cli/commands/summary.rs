use crate::cli::commands::load_sheets;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::aggregator::{summarize, summarize_trip};
use crate::errors::AppResult;
use crate::models::LogSheet;
use crate::utils::formatting::format_date;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hours, format_miles};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { input } = &cli.command {
        let sheets = load_sheets(input)?;
        if sheets.is_empty() {
            return Ok(());
        }

        print!("{}", build_summary_table(&sheets, cfg).render(cfg.separator_char));
    }
    Ok(())
}

pub(crate) fn build_summary_table(sheets: &[LogSheet], cfg: &Config) -> Table {
    let mut table = Table::new(vec![
        Column::left("Day"),
        Column::left("Date"),
        Column::right("Events"),
        Column::right("Driving"),
        Column::right("Distance"),
        Column::right("On duty"),
    ]);

    for (i, sheet) in sheets.iter().enumerate() {
        let s = summarize(sheet);
        table.add_row(vec![
            format!("Day {}", i + 1),
            format_date(sheet.date, &cfg.date_format),
            sheet.events.len().to_string(),
            format_hours(s.driving_time_hours),
            format_miles(s.distance_miles),
            format_hours(s.total_duty_hours),
        ]);
    }

    let trip = summarize_trip(sheets);
    let events: usize = sheets.iter().map(|s| s.events.len()).sum();
    table.add_row(vec![
        "Total".to_string(),
        format!("{} day(s)", sheets.len()),
        events.to_string(),
        format_hours(trip.driving_time_hours),
        format_miles(trip.distance_miles),
        format_hours(trip.total_duty_hours),
    ]);

    table
}
