use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for eldlog
/// CLI application to turn a driver's duty-status timeline into daily log sheets
#[derive(Parser)]
#[command(
    name = "eldlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Split a duty-status timeline into daily ELD log sheets: 24h grids and daily totals",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Disable ANSI colors in terminal output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print one log sheet panel per day: header, totals, grid and activities
    Sheets {
        /// Timeline JSON file (trip result object or bare event array)
        #[arg(long, short, value_name = "FILE")]
        input: String,

        /// Also report gaps, overlaps and events running past midnight
        #[arg(long = "details")]
        details: bool,
    },

    /// Print a table of per-day totals plus trip totals
    Summary {
        /// Timeline JSON file
        #[arg(long, short, value_name = "FILE")]
        input: String,
    },

    /// Render one SVG grid per day into a directory
    Render {
        /// Timeline JSON file
        #[arg(long, short, value_name = "FILE")]
        input: String,

        /// Output directory (absolute path required, created if missing)
        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: String,

        /// Canvas width in pixels (overrides config)
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels (overrides config)
        #[arg(long)]
        height: Option<u32>,

        /// Overwrite existing files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export log sheets in various formats
    Export {
        /// Timeline JSON file
        #[arg(long, short, value_name = "FILE")]
        input: String,

        /// Export format (defaults to `default_export_format` from config)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file path (absolute path required; a directory for svg)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
