//! eldlog library root.
//! Exposes the CLI parser, the high-level run() function and the core modules:
//! ingest → segmenter → (aggregator, grid renderer) → panels / exports.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Sheets { .. } => cli::commands::sheets::handle(cli, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(cli, cfg),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Path of the config file for this invocation (`--config` wins).
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(Some(&config_path(&cli)))?,
    };

    dispatch(&cli, &cfg)
}
