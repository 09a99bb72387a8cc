use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes a default
/// configuration file. With `--test` nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(expand_tilde);
    let path = Config::init_all(custom.as_deref(), cli.test)?;

    info("Initializing eldlog…");
    if cli.test {
        info(format!("Test mode: config file not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    Ok(())
}
