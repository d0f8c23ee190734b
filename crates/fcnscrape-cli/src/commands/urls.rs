//! Urls command implementation.

use crate::cli::ReleaseArgs;
use crate::commands::build_pipeline;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use fcnscrape_domain::Release;

/// Execute the urls command.
pub async fn execute_urls(args: ReleaseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let release = Release::parse(&args.release)?;
    let pipeline = build_pipeline(config)?;

    let catalog = pipeline.refresh_catalog(&release).await?;
    println!("{}", formatter.format_urls(&catalog.denest())?);

    Ok(())
}
