//! Headless Chrome page renderer
//!
//! Current-generation reference lists are filled in by script, so they are read
//! through a real browser: navigate, let asynchronous content settle, wait for
//! the content container, then collect the link text of every row.
//!
//! A missing container is reported as `Ok(None)`. The usual cause is a session
//! without permission to view that toolbox's documentation, which the caller
//! treats like an empty function list.

use fcnscrape_domain::traits::{PageRenderer, SessionLauncher};
use fcnscrape_domain::{FetchError, RowQuery};
use headless_chrome::util::Timeout;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default idle timeout before Chrome shuts itself down (seconds)
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 120;

/// Launches headless Chrome sessions
#[derive(Debug, Clone)]
pub struct ChromeLauncher {
    headless: bool,
    idle_timeout: Duration,
    executable: Option<PathBuf>,
}

impl ChromeLauncher {
    /// Create a launcher for a headless browser found on the system path
    pub fn new() -> Self {
        Self {
            headless: true,
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            executable: None,
        }
    }

    /// Show the browser window instead of running headless
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set how long an idle browser stays alive
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Use a specific Chrome/Chromium executable
    pub fn with_executable(mut self, executable: Option<PathBuf>) -> Self {
        self.executable = executable;
        self
    }
}

impl Default for ChromeLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLauncher for ChromeLauncher {
    fn launch(&self) -> Result<Arc<dyn PageRenderer>, FetchError> {
        let options = LaunchOptions::default_builder()
            .headless(self.headless)
            .idle_browser_timeout(self.idle_timeout)
            .path(self.executable.clone())
            .build()
            .map_err(|e| FetchError::Browser(format!("Invalid launch options: {}", e)))?;

        let browser = Browser::new(options)
            .map_err(|e| FetchError::Browser(format!("Failed to launch browser: {}", e)))?;
        let tab = browser
            .new_tab()
            .map_err(|e| FetchError::Browser(format!("Failed to open tab: {}", e)))?;

        info!("Browser session opened (headless: {})", self.headless);

        Ok(Arc::new(ChromeRenderer { browser, tab }))
    }
}

/// One browser session with a single reusable tab
pub struct ChromeRenderer {
    // Dropping the last handle terminates the browser process
    #[allow(dead_code)]
    browser: Browser,
    tab: Arc<Tab>,
}

impl PageRenderer for ChromeRenderer {
    fn row_link_texts(&self, url: &str, query: &RowQuery) -> Result<Option<Vec<String>>, FetchError> {
        self.tab.set_default_timeout(query.navigate_timeout);
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| navigation_error(url, e))?;

        std::thread::sleep(query.settle);

        let selector = format!("#{}", query.container_id);
        let container = match self
            .tab
            .wait_for_element_with_custom_timeout(&selector, query.locate_timeout)
        {
            Ok(container) => container,
            Err(e) => {
                debug!("Container '{}' not found on {}: {}", selector, url, e);
                return Ok(None);
            }
        };

        let rows = container
            .find_elements(&query.row_selector)
            .unwrap_or_default();

        let mut texts = Vec::with_capacity(rows.len());
        for row in rows {
            // Header and spacer rows carry no link
            let Ok(link) = row.find_element(&query.link_selector) else {
                continue;
            };
            match link.get_inner_text() {
                Ok(text) => texts.push(text),
                Err(e) => warn!("Unreadable row link on {}: {}", url, e),
            }
        }

        Ok(Some(texts))
    }

    fn close(&self) -> Result<(), FetchError> {
        self.tab
            .close(true)
            .map(|_| ())
            .map_err(|e| FetchError::Browser(format!("Failed to close tab: {}", e)))
    }
}

/// Map a failed navigation onto the fetch taxonomy
///
/// A navigation wait that never completes surfaces as `util::Timeout`; a page
/// Chrome could not reach reports a `net::ERR_*` error text.
fn navigation_error(url: &str, e: anyhow::Error) -> FetchError {
    let msg = format!("{}: {}", url, e);
    if e.downcast_ref::<Timeout>().is_some() {
        FetchError::Timeout(msg)
    } else if msg.contains("net::ERR_") {
        FetchError::Connect(msg)
    } else {
        FetchError::Browser(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_builder() {
        let launcher = ChromeLauncher::new()
            .with_headless(false)
            .with_idle_timeout(Duration::from_secs(5))
            .with_executable(Some(PathBuf::from("/usr/bin/chromium")));

        assert!(!launcher.headless);
        assert_eq!(launcher.idle_timeout, Duration::from_secs(5));
        assert_eq!(launcher.executable, Some(PathBuf::from("/usr/bin/chromium")));
    }

    #[test]
    fn test_default_launcher_is_headless() {
        let launcher = ChromeLauncher::default();
        assert!(launcher.headless);
        assert!(launcher.executable.is_none());
    }

    #[test]
    fn test_navigation_wait_timeout_is_transport() {
        let err = navigation_error("https://x/referencelist.html", anyhow::Error::new(Timeout));
        assert!(matches!(err, FetchError::Timeout(_)));
        assert!(err.is_transport());
    }

    #[test]
    fn test_unreachable_page_is_connect() {
        let err = navigation_error(
            "https://x/referencelist.html",
            anyhow::anyhow!("Navigate failed: net::ERR_CONNECTION_REFUSED"),
        );
        assert!(matches!(err, FetchError::Connect(_)));
    }

    #[test]
    fn test_other_navigation_failures_are_browser_errors() {
        let err = navigation_error("u", anyhow::anyhow!("protocol error: timed out waiting"));
        assert!(matches!(err, FetchError::Browser(_)));
        assert!(!err.is_transport());
    }

    // Requires a local Chrome/Chromium installation
    #[test]
    #[ignore]
    fn test_launch_and_close_integration() {
        let session = ChromeLauncher::new().launch().unwrap();
        session.close().unwrap();
    }
}
