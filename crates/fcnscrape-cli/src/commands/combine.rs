//! Combine command implementation.

use crate::cli::ReleaseArgs;
use crate::commands::build_store;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use fcnscrape_domain::traits::ArtifactStore;
use fcnscrape_domain::Release;

/// Execute the combine command.
pub fn execute_combine(args: ReleaseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let release = Release::parse(&args.release)?;
    let count = build_store(config).combine(&release)?;

    println!("{}", formatter.format_combined(&release, count)?);
    Ok(())
}
