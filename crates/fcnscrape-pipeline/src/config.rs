//! Configuration for pipeline runs
//!
//! Defines artifact locations, the manifest timeout and browser settings.

use fcnscrape_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the scraping pipeline
///
/// # Examples
///
/// ```
/// use fcnscrape_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.json_root.to_str(), Some("./JSONout"));
/// assert_eq!(config.docset_timeout_secs, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Root directory for per-release artifacts
    pub json_root: PathBuf,

    /// Function blacklist file
    pub blacklist_path: PathBuf,

    /// Timeout for the product manifest request (seconds)
    pub docset_timeout_secs: u64,

    /// Raw extraction settings
    pub extractor: ExtractorConfig,

    /// Browser session settings for rendered releases
    pub browser: BrowserConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            json_root: PathBuf::from("./JSONout"),
            blacklist_path: PathBuf::from("./function_blacklist.JSON"),
            docset_timeout_secs: 2,
            extractor: ExtractorConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Get the manifest timeout as a Duration
    pub fn docset_timeout(&self) -> Duration {
        Duration::from_secs(self.docset_timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.docset_timeout_secs == 0 {
            return Err("docset_timeout_secs must be greater than 0".to_string());
        }
        if self.json_root.as_os_str().is_empty() {
            return Err("json_root cannot be empty".to_string());
        }
        self.extractor.validate()?;
        self.browser.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

/// Browser automation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run the browser without a window
    pub headless: bool,

    /// Close the browser after this long without protocol traffic (seconds)
    pub idle_timeout_secs: u64,

    /// Browser executable; discovered automatically when unset
    pub chrome_path: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            idle_timeout_secs: 60,
            chrome_path: None,
        }
    }
}

impl BrowserConfig {
    /// Get the idle timeout as a Duration
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.idle_timeout_secs == 0 {
            return Err("idle_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.blacklist_path, PathBuf::from("./function_blacklist.JSON"));
        assert_eq!(config.docset_timeout(), Duration::from_secs(2));
        assert!(config.browser.headless);
    }

    #[test]
    fn test_validation() {
        let mut config = PipelineConfig::default();
        config.docset_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.browser.idle_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.extractor.json_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nested_toml() {
        let toml_str = r#"
            json_root = "/tmp/out"

            [extractor]
            html_timeout_secs = 5

            [browser]
            headless = false
            chrome_path = "/usr/bin/chromium"
        "#;

        let config = PipelineConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.json_root, PathBuf::from("/tmp/out"));
        assert_eq!(config.extractor.html_timeout_secs, 5);
        assert_eq!(config.extractor.json_timeout_secs, 10);
        assert!(!config.browser.headless);
        assert_eq!(config.browser.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
        assert_eq!(config.docset_timeout_secs, 2);
    }
}
