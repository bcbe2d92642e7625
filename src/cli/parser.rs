use crate::core::dashboard::Section;
use crate::models::Period;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rLogDash
/// Terminal dashboard for production and logistics CSV logs
#[derive(Parser)]
#[command(
    name = "rlogdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Production & logistics analytics: man-hours, worker efficiency, kms and fuel per period",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `report` and `watch`.
#[derive(Args, Clone, Debug)]
pub struct ViewArgs {
    /// View range (defaults to `default_period` from the configuration)
    #[arg(long, short, value_enum)]
    pub period: Option<Period>,

    #[arg(long, value_enum, default_value = "all")]
    pub section: Section,

    /// Override the production source (http(s) URL, file:// URL or path)
    #[arg(long = "production-url", value_name = "URL")]
    pub production_url: Option<String>,

    /// Override the logistics source (http(s) URL, file:// URL or path)
    #[arg(long = "logistics-url", value_name = "URL")]
    pub logistics_url: Option<String>,

    /// Rows per detail table (0 = all; defaults to `detail_rows`)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print the report as JSON instead of the text dashboard
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for invalid fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Fetch both logs once and render the dashboard
    Report {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Re-render the dashboard periodically, reusing cached sources
    Watch {
        #[command(flatten)]
        view: ViewArgs,

        #[arg(long, default_value_t = 60, help = "Seconds between render passes")]
        interval: u64,

        #[arg(long, default_value_t = 0, help = "Stop after N passes (0 = run forever)")]
        iterations: usize,
    },
}
