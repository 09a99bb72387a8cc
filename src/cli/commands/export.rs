use crate::cli::commands::load_sheets;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        force,
    } = cmd
    {
        let sheets = load_sheets(input)?;
        let format = format.unwrap_or(cfg.default_export_format);
        ExportLogic::export(&sheets, format, file, *force, cfg)?;
    }
    Ok(())
}
