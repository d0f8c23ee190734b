//! Function name filtering and normalization
//!
//! Every raw candidate goes through the same ordered rules:
//!
//! 1. reject if it contains `%` or `:` (comments, syntax artifacts)
//! 2. reject if it starts with `ocv` (C++ interop names)
//! 3. reject if it is in the blacklist (exact match)
//! 4. strip bracketed annotations such as `(opcda)` and trim
//! 5. split comma-joined groups into separate names
//! 6. keep dotted names (`obj.method`) whole
//! 7. otherwise keep only the leading word
//!
//! Rules 1-3 look at the raw string, so stripping can never hide a rejection.
//! Exactly one of 5, 6, 7 applies to a surviving candidate.

use fcnscrape_domain::FunctionBlacklist;
use regex::Regex;
use std::sync::LazyLock;

/// Bracketed annotation whose interior is letters, digits, commas or periods
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\[\(\{][A-Za-z0-9,.]+[\]\)\}]").expect("annotation pattern is valid")
});

/// First maximal run of word characters at the start of the string
static LEADING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+").expect("leading word pattern is valid"));

/// Prefix of third-party C++ interop entries
const INTEROP_PREFIX: &str = "ocv";

/// Why a candidate contributed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Contains `%` or `:`
    ForbiddenCharacter,
    /// Starts with the interop prefix
    InteropPrefix,
    /// Exact blacklist match
    Blacklisted,
    /// No word token left after normalization
    NoName,
}

impl Rejection {
    /// Short human readable reason
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::ForbiddenCharacter => "contains '%' or ':'",
            Rejection::InteropPrefix => "interop prefix",
            Rejection::Blacklisted => "blacklisted",
            Rejection::NoName => "no function name",
        }
    }
}

/// Run the filter over a toolbox's raw candidates
///
/// Output order follows input order; comma groups expand in place. Duplicates
/// are kept (deduplication happens when toolboxes are combined).
pub fn filter_functions<S: AsRef<str>>(raw: &[S], blacklist: &FunctionBlacklist) -> Vec<String> {
    raw.iter()
        .filter_map(|candidate| normalize_candidate(candidate.as_ref(), blacklist).ok())
        .flatten()
        .collect()
}

/// Apply the rules to a single candidate
///
/// Returns the names it contributes (possibly several for a comma group, or
/// none for a group of empty pieces), or why it was dropped.
pub fn normalize_candidate(
    candidate: &str,
    blacklist: &FunctionBlacklist,
) -> Result<Vec<String>, Rejection> {
    if candidate.contains(['%', ':']) {
        return Err(Rejection::ForbiddenCharacter);
    }
    if candidate.starts_with(INTEROP_PREFIX) {
        return Err(Rejection::InteropPrefix);
    }
    if blacklist.contains(candidate) {
        return Err(Rejection::Blacklisted);
    }

    let stripped = ANNOTATION.replace_all(candidate, "");
    let stripped = stripped.trim();

    if stripped.contains(',') {
        return Ok(stripped
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect());
    }

    if stripped.contains('.') {
        return Ok(vec![stripped.to_string()]);
    }

    LEADING_WORD
        .find(stripped)
        .map(|m| vec![m.as_str().to_string()])
        .ok_or(Rejection::NoName)
}
