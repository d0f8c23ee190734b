//! Filter command implementation.

use crate::cli::FilterArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{FilterOutcome, Formatter};
use fcnscrape_domain::traits::ArtifactStore;
use fcnscrape_domain::FunctionBlacklist;
use fcnscrape_extractor::normalize_candidate;
use fcnscrape_store::JsonStore;
use std::io::{self, BufRead};
use std::path::Path;

/// Execute the filter command.
pub fn execute_filter(args: FilterArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let blacklist = match &args.blacklist {
        Some(path) => load_blacklist(config, path)?,
        // The configured blacklist is optional here
        None if config.pipeline.blacklist_path.exists() => {
            load_blacklist(config, &config.pipeline.blacklist_path)?
        }
        None => FunctionBlacklist::new(),
    };

    let candidates = if args.candidates.is_empty() {
        io::stdin().lock().lines().collect::<io::Result<Vec<String>>>()?
    } else {
        args.candidates
    };

    let outcomes = filter_outcomes(candidates, &blacklist);
    println!("{}", formatter.format_filtered(&outcomes)?);
    Ok(())
}

fn load_blacklist(config: &Config, path: &Path) -> Result<FunctionBlacklist> {
    Ok(JsonStore::new(&config.pipeline.json_root, path).load_blacklist()?)
}

/// Run each candidate through the filter, keeping why rejected ones were dropped.
pub fn filter_outcomes(candidates: Vec<String>, blacklist: &FunctionBlacklist) -> Vec<FilterOutcome> {
    candidates
        .into_iter()
        .map(|candidate| {
            let outcome = normalize_candidate(&candidate, blacklist);
            (candidate, outcome)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcnscrape_extractor::Rejection;

    #[test]
    fn test_filter_outcomes() {
        let blacklist: FunctionBlacklist = ["end"].into_iter().collect();
        let outcomes = filter_outcomes(
            vec!["plot, bar".into(), "end".into(), "ocvFoo".into()],
            &blacklist,
        );

        assert_eq!(outcomes[0].1, Ok(vec!["plot".to_string(), "bar".to_string()]));
        assert_eq!(outcomes[1].1, Err(Rejection::Blacklisted));
        assert_eq!(outcomes[2].1, Err(Rejection::InteropPrefix));
    }
}
