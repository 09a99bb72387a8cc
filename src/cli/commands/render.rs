use crate::cli::commands::load_sheets;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::CanvasSize;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::export_svg_dir;
use crate::utils::path::require_absolute;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        input,
        out_dir,
        width,
        height,
        force,
    } = cmd
    {
        let canvas = canvas_for(cfg, *width, *height)?;
        let dir = require_absolute(out_dir)?;

        let sheets = load_sheets(input)?;
        if sheets.is_empty() {
            return Ok(());
        }

        let panels = Core::build_panels(&sheets, canvas, &cfg.grid_style(), &cfg.date_format);
        export_svg_dir(&panels, &dir, *force)?;
    }
    Ok(())
}

/// Command-line size wins over the configured one; the result must still
/// pass the same checks as a config file.
fn canvas_for(cfg: &Config, width: Option<u32>, height: Option<u32>) -> AppResult<CanvasSize> {
    let sized = Config {
        canvas_width: width.unwrap_or(cfg.canvas_width),
        canvas_height: height.unwrap_or(cfg.canvas_height),
        ..cfg.clone()
    };
    sized.validate()?;
    Ok(sized.canvas())
}
