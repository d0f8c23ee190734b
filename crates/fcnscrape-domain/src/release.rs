//! Release identifier module

use std::fmt;

/// A documentation release identifier, e.g. `R2022a`
///
/// Format: the letter `R`, four digits, then `a` or `b`. The value is only
/// used as an opaque key; beyond ordering for the format lookup table it is
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Release(String);

/// Errors raised while validating a release or resolving its format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    /// The identifier does not match `R\d{4}[ab]`
    InvalidFormat(String),

    /// The identifier is well formed but predates every known documentation layout
    Unsupported(String),
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseError::InvalidFormat(s) => {
                write!(f, "Invalid release specified: '{}' (expected e.g. 'R2020b')", s)
            }
            ReleaseError::Unsupported(s) => {
                write!(f, "Release '{}' has no known documentation format", s)
            }
        }
    }
}

impl std::error::Error for ReleaseError {}

impl Release {
    /// Parse and validate a release identifier
    ///
    /// # Errors
    /// Returns [`ReleaseError::InvalidFormat`] unless the whole string is `R`,
    /// four ASCII digits and a trailing `a` or `b`.
    pub fn parse(value: &str) -> Result<Self, ReleaseError> {
        let bytes = value.as_bytes();
        let valid = bytes.len() == 6
            && bytes[0] == b'R'
            && bytes[1..5].iter().all(u8::is_ascii_digit)
            && matches!(bytes[5], b'a' | b'b');

        if !valid {
            return Err(ReleaseError::InvalidFormat(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    /// Get the release as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Release {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
