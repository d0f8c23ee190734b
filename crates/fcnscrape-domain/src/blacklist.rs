//! Function name blacklist

use std::collections::HashSet;

/// Exact-match set of function names excluded from every toolbox
///
/// Loaded once per pipeline run and read-only afterwards. Matching is exact
/// and case-sensitive: an entry `foo` never suppresses `foobar` or `Foo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionBlacklist(HashSet<String>);

impl FunctionBlacklist {
    /// Create an empty blacklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is blacklisted
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the blacklist is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FunctionBlacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let blacklist: FunctionBlacklist = ["foo"].into_iter().collect();
        assert!(blacklist.contains("foo"));
        assert!(!blacklist.contains("foobar"));
        assert!(!blacklist.contains("Foo"));
        assert!(!blacklist.contains("fo"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let blacklist: FunctionBlacklist = ["a", "a", "b"].into_iter().collect();
        assert_eq!(blacklist.len(), 2);
        assert!(!blacklist.is_empty());
    }
}
