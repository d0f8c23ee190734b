//! Configuration for the Extractor

use fcnscrape_domain::RowQuery;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for raw extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Timeout for static HTML function list pages (seconds)
    pub html_timeout_secs: u64,

    /// Timeout for reference-list API requests (seconds)
    pub json_timeout_secs: u64,

    /// How long a rendered page may take to navigate (seconds)
    pub navigate_timeout_secs: u64,

    /// Pause after navigation so asynchronous content can load (milliseconds)
    pub render_settle_millis: u64,

    /// How long to wait for the rendered content container (seconds)
    pub locate_timeout_secs: u64,

    /// `id` of the rendered reference list container
    pub container_id: String,

    /// Selector of row elements inside the container
    pub row_selector: String,

    /// Selector of the function link inside a row
    pub link_selector: String,
}

impl ExtractorConfig {
    /// Get the static page timeout as a Duration
    pub fn html_timeout(&self) -> Duration {
        Duration::from_secs(self.html_timeout_secs)
    }

    /// Get the API timeout as a Duration
    pub fn json_timeout(&self) -> Duration {
        Duration::from_secs(self.json_timeout_secs)
    }

    /// Build the row query handed to the page renderer
    pub fn row_query(&self) -> RowQuery {
        RowQuery {
            container_id: self.container_id.clone(),
            row_selector: self.row_selector.clone(),
            link_selector: self.link_selector.clone(),
            navigate_timeout: Duration::from_secs(self.navigate_timeout_secs),
            settle: Duration::from_millis(self.render_settle_millis),
            locate_timeout: Duration::from_secs(self.locate_timeout_secs),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.html_timeout_secs == 0 {
            return Err("html_timeout_secs must be greater than 0".to_string());
        }
        if self.json_timeout_secs == 0 {
            return Err("json_timeout_secs must be greater than 0".to_string());
        }
        if self.navigate_timeout_secs == 0 {
            return Err("navigate_timeout_secs must be greater than 0".to_string());
        }
        if self.locate_timeout_secs == 0 {
            return Err("locate_timeout_secs must be greater than 0".to_string());
        }
        if self.container_id.trim().is_empty() {
            return Err("container_id cannot be empty".to_string());
        }
        if self.row_selector.trim().is_empty() || self.link_selector.trim().is_empty() {
            return Err("row_selector and link_selector cannot be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            html_timeout_secs: 2,
            json_timeout_secs: 10,
            navigate_timeout_secs: 5,
            render_settle_millis: 2_000,
            locate_timeout_secs: 5,
            container_id: "reflist_content".to_string(),
            row_selector: "tr".to_string(),
            link_selector: "a".to_string(),
        }
    }
}
