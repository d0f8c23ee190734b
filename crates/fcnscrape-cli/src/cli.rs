//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fcnscrape - Scrape function name lists from versioned online documentation.
#[derive(Debug, Parser)]
#[command(name = "fcnscrape")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FCNSCRAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug events
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory for release artifacts
    #[arg(short, long, global = true)]
    pub output_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape every toolbox of a release and combine the results
    Run(RunArgs),

    /// Rebuild a release's toolbox URL cache and list it
    Urls(ReleaseArgs),

    /// Rerun the combiner over a release's toolbox artifacts
    Combine(ReleaseArgs),

    /// Run the function name filter over candidate strings
    Filter(FilterArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Release to scrape (e.g., R2022a); defaults to the configured current release
    pub release: Option<String>,

    /// Rebuild the toolbox URL cache even if one exists
    #[arg(long)]
    pub force_new_cache: bool,
}

/// Arguments for commands operating on one release.
#[derive(Debug, Parser)]
pub struct ReleaseArgs {
    /// Release identifier (e.g., R2022a)
    pub release: String,
}

/// Arguments for the filter command.
#[derive(Debug, Parser)]
pub struct FilterArgs {
    /// Blacklist file (defaults to the configured blacklist)
    #[arg(short, long)]
    pub blacklist: Option<PathBuf>,

    /// Raw candidates; read one per line from stdin when omitted
    pub candidates: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
