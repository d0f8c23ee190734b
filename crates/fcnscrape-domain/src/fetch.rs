//! Fetch results and the transport failure taxonomy

use std::fmt;
use std::time::Duration;

/// A fetched document: HTTP status and decoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl FetchedDocument {
    /// Create a document from a status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What to read from a script-rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowQuery {
    /// `id` attribute of the content container
    pub container_id: String,
    /// Selector of row elements inside the container
    pub row_selector: String,
    /// Selector of the anchor inside each row
    pub link_selector: String,
    /// How long navigation may take before the page counts as timed out
    pub navigate_timeout: Duration,
    /// Pause after navigation for asynchronous content
    pub settle: Duration,
    /// How long to wait for the container before giving up
    pub locate_timeout: Duration,
}

/// Errors raised by document sources and page renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request timed out
    Timeout(String),

    /// The connection could not be established
    Connect(String),

    /// Browser automation failed (launch, navigation, protocol)
    Browser(String),

    /// Any other failure (body decoding, invalid URL, ...)
    Other(String),
}

impl FetchError {
    /// Transport failures are recoverable per toolbox: the toolbox is skipped
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Timeout(_) | FetchError::Connect(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            FetchError::Connect(msg) => write!(f, "Connection failed: {}", msg),
            FetchError::Browser(msg) => write!(f, "Browser error: {}", msg),
            FetchError::Other(msg) => write!(f, "Fetch error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(FetchError::Timeout("t".into()).is_transport());
        assert!(FetchError::Connect("c".into()).is_transport());
        assert!(!FetchError::Browser("b".into()).is_transport());
        assert!(!FetchError::Other("o".into()).is_transport());
    }

    #[test]
    fn test_success_status() {
        assert!(FetchedDocument::new(200, "").is_success());
        assert!(!FetchedDocument::new(403, "").is_success());
        assert!(!FetchedDocument::new(301, "").is_success());
    }
}
