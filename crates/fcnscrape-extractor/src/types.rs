//! Result types for raw extraction

use std::fmt;

/// Why an extraction produced no candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The endpoint refused the request (restricted or licensed toolbox)
    AccessDenied(u16),
    /// The rendered content container never appeared
    ContainerNotFound,
    /// The document was read but contained no candidate fragments
    NoMatches,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::AccessDenied(status) => write!(f, "access denied (HTTP {})", status),
            EmptyReason::ContainerNotFound => write!(f, "content container not found"),
            EmptyReason::NoMatches => write!(f, "no candidates on page"),
        }
    }
}

/// Raw candidates pulled out of one toolbox's function list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawExtraction {
    /// Unprocessed candidate strings in document order
    pub candidates: Vec<String>,

    /// Set when `candidates` is empty
    pub empty_reason: Option<EmptyReason>,
}

impl RawExtraction {
    /// Wrap a candidate list, recording [`EmptyReason::NoMatches`] if it is empty
    pub fn from_candidates(candidates: Vec<String>) -> Self {
        let empty_reason = candidates.is_empty().then_some(EmptyReason::NoMatches);
        Self {
            candidates,
            empty_reason,
        }
    }

    /// An extraction with nothing in it
    pub fn empty(reason: EmptyReason) -> Self {
        Self {
            candidates: Vec::new(),
            empty_reason: Some(reason),
        }
    }

    /// Whether there are no candidates
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_candidates() {
        let extraction = RawExtraction::from_candidates(vec!["plot".into()]);
        assert_eq!(extraction.len(), 1);
        assert_eq!(extraction.empty_reason, None);

        let extraction = RawExtraction::from_candidates(Vec::new());
        assert!(extraction.is_empty());
        assert_eq!(extraction.empty_reason, Some(EmptyReason::NoMatches));
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(EmptyReason::AccessDenied(403).to_string(), "access denied (HTTP 403)");
    }
}
