//! Scoped browser session

use fcnscrape_domain::traits::{PageRenderer, SessionLauncher};
use fcnscrape_domain::FetchError;
use std::sync::Arc;
use tracing::{debug, warn};

/// A rendering session that is closed when dropped
///
/// Held across the toolbox loop of a rendered release; every exit path,
/// including early returns and unwinding, releases the browser.
pub struct RenderSession {
    renderer: Arc<dyn PageRenderer>,
}

impl RenderSession {
    /// Launch a new session
    pub fn open<L: SessionLauncher>(launcher: &L) -> Result<Self, FetchError> {
        let renderer = launcher.launch()?;
        debug!("Browser session opened");
        Ok(Self { renderer })
    }

    /// The session's renderer
    pub fn renderer(&self) -> &Arc<dyn PageRenderer> {
        &self.renderer
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        match self.renderer.close() {
            Ok(()) => debug!("Browser session closed"),
            Err(e) => warn!("Failed to close browser session: {}", e),
        }
    }
}
