//! fcnscrape Fetch Layer
//!
//! Implementations of the document and rendering traits from `fcnscrape-domain`.
//!
//! # Sources
//!
//! - `HttpSource`: reqwest client for static pages and the reference-list API
//! - `ChromeLauncher` / `ChromeRenderer`: headless Chrome for script-rendered pages
//! - `MockSource`, `MockRenderer`, `MockLauncher`: deterministic stand-ins for testing
//!
//! # Examples
//!
//! ```
//! use fcnscrape_fetch::{MockLauncher, MockRenderer, MockSource};
//! use fcnscrape_domain::traits::SessionLauncher;
//!
//! let mut source = MockSource::new();
//! source.add_page("https://example.com/list", "<code>plot</code>");
//!
//! let mut renderer = MockRenderer::new();
//! renderer.add_rows("https://example.com/rendered", ["plot", "scatter"]);
//! let launcher = MockLauncher::new(renderer);
//! let _session = launcher.launch().unwrap();
//! ```

#![warn(missing_docs)]

pub mod chrome;
pub mod http;

use fcnscrape_domain::traits::{DocumentSource, PageRenderer, SessionLauncher};
use fcnscrape_domain::{FetchError, FetchedDocument, RowQuery};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub use chrome::{ChromeLauncher, ChromeRenderer};
pub use http::HttpSource;

/// Mock document source for deterministic testing
///
/// Serves pre-configured documents per URL without making network calls.
/// Unknown URLs answer 404.
///
/// # Examples
///
/// ```
/// use fcnscrape_fetch::MockSource;
/// use fcnscrape_domain::FetchError;
///
/// let mut source = MockSource::new();
/// source.add_page("https://a", "<html></html>");
/// source.add_response("https://b", 403, "denied");
/// source.add_error("https://c", FetchError::Timeout("slow".into()));
/// assert_eq!(source.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    responses: Arc<Mutex<HashMap<String, Result<FetchedDocument, FetchError>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockSource {
    /// Create a mock with no configured responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `url`
    pub fn add_page(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.add_response(url, 200, body);
    }

    /// Serve `body` with the given status for `url`
    pub fn add_response(&mut self, url: impl Into<String>, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), Ok(FetchedDocument::new(status, body)));
    }

    /// Fail requests for `url` with `error`
    pub fn add_error(&mut self, url: impl Into<String>, error: FetchError) {
        self.responses.lock().unwrap().insert(url.into(), Err(error));
    }

    /// Number of fetches performed
    pub fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    /// URLs fetched so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl DocumentSource for MockSource {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<FetchedDocument, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());

        let responses = self.responses.lock().unwrap();
        match responses.get(url) {
            Some(response) => response.clone(),
            None => Ok(FetchedDocument::new(404, "Not Found")),
        }
    }
}

/// Mock page renderer for deterministic testing
///
/// Pages map URLs to the row link texts of the rendered container; unknown
/// URLs behave as if the container never appeared.
#[derive(Debug, Clone, Default)]
pub struct MockRenderer {
    pages: Arc<Mutex<HashMap<String, Result<Vec<String>, FetchError>>>>,
    renders: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
}

impl MockRenderer {
    /// Create a renderer with no pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `rows` as the container's link texts for `url`
    pub fn add_rows<S: Into<String>>(&mut self, url: impl Into<String>, rows: impl IntoIterator<Item = S>) {
        let rows = rows.into_iter().map(Into::into).collect();
        self.pages.lock().unwrap().insert(url.into(), Ok(rows));
    }

    /// Fail rendering `url` with `error`
    pub fn add_error(&mut self, url: impl Into<String>, error: FetchError) {
        self.pages.lock().unwrap().insert(url.into(), Err(error));
    }

    /// Number of pages rendered
    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }

    /// Number of times the session was closed
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl PageRenderer for MockRenderer {
    fn row_link_texts(&self, url: &str, _query: &RowQuery) -> Result<Option<Vec<String>>, FetchError> {
        self.renders.fetch_add(1, Ordering::SeqCst);

        match self.pages.lock().unwrap().get(url) {
            Some(Ok(rows)) => Ok(Some(rows.clone())),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(None),
        }
    }

    fn close(&self) -> Result<(), FetchError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Launcher handing out a shared [`MockRenderer`]
#[derive(Debug, Clone, Default)]
pub struct MockLauncher {
    renderer: MockRenderer,
    launches: Arc<AtomicUsize>,
    fail_with: Option<FetchError>,
}

impl MockLauncher {
    /// Launch sessions backed by `renderer`
    pub fn new(renderer: MockRenderer) -> Self {
        Self {
            renderer,
            launches: Arc::new(AtomicUsize::new(0)),
            fail_with: None,
        }
    }

    /// Make every launch fail with `error`
    pub fn failing(error: FetchError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    /// Number of sessions launched
    pub fn launch_count(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    /// The renderer handed to every session
    pub fn renderer(&self) -> &MockRenderer {
        &self.renderer
    }
}

impl SessionLauncher for MockLauncher {
    fn launch(&self) -> Result<Arc<dyn PageRenderer>, FetchError> {
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(self.renderer.clone()))
    }
}
