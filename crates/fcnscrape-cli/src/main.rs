//! fcnscrape CLI - Scrape function name lists from versioned online documentation.

use clap::Parser;
use fcnscrape_cli::commands;
use fcnscrape_cli::logging::init_logging;
use fcnscrape_cli::{Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> fcnscrape_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config; flags override file values
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(root) = cli.output_root {
        config.pipeline.json_root = root;
    }

    init_logging(&config.log_file, cli.verbose)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Command failures are reported through the formatter
    if let Err(e) = execute(cli.command, &config, &formatter).await {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }

    Ok(())
}

async fn execute(command: Command, config: &Config, formatter: &Formatter) -> fcnscrape_cli::Result<()> {
    match command {
        Command::Run(args) => commands::execute_run(args, config, formatter).await,
        Command::Urls(args) => commands::execute_urls(args, config, formatter).await,
        Command::Combine(args) => commands::execute_combine(args, config, formatter),
        Command::Filter(args) => commands::execute_filter(args, config, formatter),
    }
}
