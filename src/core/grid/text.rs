//! Terminal backend: a character version of the grid, one line per status row.

use super::geometry::HOURS_PER_DAY;
use super::renderer::RenderedGrid;
use crate::models::DutyStatus;
use crate::utils::colors::style_for_event;
use crate::utils::formatting::pad_right;
use ansi_term::Colour;

const LABEL_WIDTH: usize = 9;
const FILLED: char = '█';
const EMPTY: char = '·';

/// Build the text grid. `columns_per_hour` sets the resolution (4 → 15 minutes
/// per cell). With `color` off, the output is plain text.
pub fn render_text_grid(grid: &RenderedGrid, columns_per_hour: usize, color: bool) -> Vec<String> {
    let cph = columns_per_hour.max(1);
    let cells = HOURS_PER_DAY as usize * cph;
    let mut lines = Vec::with_capacity(DutyStatus::ALL.len() + 1);

    lines.push(format!("{}{}", " ".repeat(LABEL_WIDTH), hour_header(cph)));

    for status in DutyStatus::ALL {
        let row = status.row();
        let mut line = pad_right(status.row_label(), LABEL_WIDTH);

        for c in 0..cells {
            let mid_hour = (c as f64 + 0.5) / cph as f64;

            // last block drawn wins, as on a canvas
            let hit = grid
                .blocks
                .iter()
                .rev()
                .find(|b| b.row == row && b.start_hour <= mid_hour && mid_hour < b.end_hour);

            match hit {
                Some(block) if color => {
                    let paint = style_for_event(&block.status).terminal;
                    line.push_str(&paint.paint(FILLED.to_string()).to_string());
                }
                Some(_) => line.push(FILLED),
                None if color => {
                    line.push_str(&Colour::Fixed(240).paint(EMPTY.to_string()).to_string())
                }
                None => line.push(EMPTY),
            }
        }

        lines.push(line);
    }

    lines
}

/// `00` at column 0, then a label every 6 hours.
fn hour_header(cph: usize) -> String {
    let cells = HOURS_PER_DAY as usize * cph;
    let mut header = vec![' '; cells];

    for hour in (0..HOURS_PER_DAY as usize).step_by(6) {
        let label = format!("{:02}", hour);
        for (k, ch) in label.chars().enumerate() {
            if let Some(slot) = header.get_mut(hour * cph + k) {
                *slot = ch;
            }
        }
    }

    header.into_iter().collect()
}
