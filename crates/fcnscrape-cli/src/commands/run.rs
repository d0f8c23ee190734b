//! Run command implementation.

use crate::cli::RunArgs;
use crate::commands::build_pipeline;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use fcnscrape_domain::{DocFormat, Release};
use tracing::info;

/// Execute the run command.
pub async fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let release_str = args.release.as_deref().unwrap_or(&config.current_release);

    // Reject bad or unsupported releases before any network access
    let release = Release::parse(release_str)?;
    let format = DocFormat::for_release(&release)?;
    info!("Starting scrape of {} ({})", release, format.as_str());

    let pipeline = build_pipeline(config)?;

    if pipeline.ensure_catalog(&release, args.force_new_cache).await? && !formatter.is_quiet() {
        println!("{}", formatter.info(&format!("Built toolbox URL cache for {}", release)));
    }

    let report = pipeline.run(&release).await?;
    info!("{}", report.summary());

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
