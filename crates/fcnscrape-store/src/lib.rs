//! fcnscrape Storage Layer
//!
//! Implements the ArtifactStore trait on top of plain JSON files.
//!
//! # Layout
//!
//! ```text
//! {root}/{release}/_url_cache.JSON       nested toolbox catalog
//! {root}/{release}/{ToolboxName}.JSON    one filtered list per toolbox
//! {root}/{release}/_combined.JSON        deduplicated union of the above
//! ```
//!
//! Every artifact is written tab-indented with object keys in insertion order,
//! so rerunning a release produces byte-identical files.
//!
//! # Examples
//!
//! ```no_run
//! use fcnscrape_store::JsonStore;
//!
//! let store = JsonStore::new("./JSONout", "./function_blacklist.JSON");
//! // Store is now ready for artifact operations
//! ```

#![warn(missing_docs)]

mod codec;
mod error;

pub use error::StoreError;

use codec::{catalog_from_value, catalog_to_value, string_list, to_tabbed_json};
use fcnscrape_domain::traits::ArtifactStore;
use fcnscrape_domain::{FunctionBlacklist, Release, ToolboxCatalog, ToolboxUrlMap};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the per-release URL cache
pub const URL_CACHE_FILE: &str = "_url_cache.JSON";

/// File name of the per-release combined function list
pub const COMBINED_FILE: &str = "_combined.JSON";

/// Extension shared by every artifact
const ARTIFACT_EXTENSION: &str = "JSON";

/// JSON file implementation of ArtifactStore
///
/// All artifacts of a release live in one directory below `root`; the
/// blacklist is a standalone list file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
    blacklist_path: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `root` reading the blacklist from `blacklist_path`
    ///
    /// Nothing is touched on disk until an artifact is written.
    pub fn new(root: impl Into<PathBuf>, blacklist_path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            blacklist_path: blacklist_path.into(),
        }
    }

    /// Output root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a release's artifacts
    pub fn release_dir(&self, release: &Release) -> PathBuf {
        self.root.join(release.as_str())
    }

    /// Path of the release's URL cache
    pub fn catalog_path(&self, release: &Release) -> PathBuf {
        self.release_dir(release).join(URL_CACHE_FILE)
    }

    /// Path of a toolbox artifact
    ///
    /// The display name is used with its spaces removed.
    pub fn toolbox_path(&self, release: &Release, toolbox: &str) -> PathBuf {
        let stem: String = toolbox.chars().filter(|c| *c != ' ').collect();
        self.release_dir(release)
            .join(format!("{}.{}", stem, ARTIFACT_EXTENSION))
    }

    /// Path of the release's combined artifact
    pub fn combined_path(&self, release: &Release) -> PathBuf {
        self.release_dir(release).join(COMBINED_FILE)
    }

    /// Read the combined artifact back
    pub fn load_combined(&self, release: &Release) -> Result<Vec<String>, StoreError> {
        let path = self.combined_path(release);
        string_list(read_json(&path)?, "combined artifact")
    }

    /// Load the release's nested catalog without flattening it
    pub fn load_catalog(&self, release: &Release) -> Result<ToolboxCatalog, StoreError> {
        let path = self.catalog_path(release);
        catalog_from_value(&read_json(&path)?)
    }

    fn write_artifact(&self, release: &Release, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        let dir = self.release_dir(release);
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        fs::write(path, bytes).map_err(|e| StoreError::io(path, e))?;
        debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Toolbox artifacts of a release, sorted by file name
    fn toolbox_artifacts(&self, release: &Release) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.release_dir(release);
        let entries = fs::read_dir(&dir).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::MissingArtifact(dir.clone()),
            _ => StoreError::io(&dir, e),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&dir, e))?.path();
            let is_artifact = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(ARTIFACT_EXTENSION);
            let is_excluded = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name == URL_CACHE_FILE || name == COMBINED_FILE);

            if is_artifact && !is_excluded {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl ArtifactStore for JsonStore {
    type Error = StoreError;

    fn load_blacklist(&self) -> Result<FunctionBlacklist, Self::Error> {
        let names = string_list(read_json(&self.blacklist_path)?, "function blacklist")?;
        let blacklist: FunctionBlacklist = names.into_iter().collect();
        debug!("Loaded {} blacklisted names", blacklist.len());
        Ok(blacklist)
    }

    fn has_catalog(&self, release: &Release) -> bool {
        self.catalog_path(release).is_file()
    }

    fn save_catalog(&self, release: &Release, catalog: &ToolboxCatalog) -> Result<(), Self::Error> {
        let path = self.catalog_path(release);
        let bytes = to_tabbed_json(&catalog_to_value(catalog)).map_err(|e| StoreError::json(&path, e))?;
        self.write_artifact(release, &path, &bytes)
    }

    fn load_toolbox_urls(&self, release: &Release) -> Result<ToolboxUrlMap, Self::Error> {
        Ok(self.load_catalog(release)?.denest())
    }

    fn write_toolbox(&self, release: &Release, toolbox: &str, functions: &[String]) -> Result<(), Self::Error> {
        let path = self.toolbox_path(release, toolbox);
        let bytes = to_tabbed_json(functions).map_err(|e| StoreError::json(&path, e))?;
        self.write_artifact(release, &path, &bytes)
    }

    fn combine(&self, release: &Release) -> Result<usize, Self::Error> {
        let artifacts = self.toolbox_artifacts(release)?;

        let mut unique = BTreeSet::new();
        for path in &artifacts {
            let what = format!("toolbox artifact {}", path.display());
            unique.extend(string_list(read_json(path)?, &what)?);
        }

        let mut combined: Vec<String> = unique.into_iter().collect();
        combined.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });

        let path = self.combined_path(release);
        let bytes = to_tabbed_json(&combined).map_err(|e| StoreError::json(&path, e))?;
        self.write_artifact(release, &path, &bytes)?;

        info!(
            "Combined {} toolbox artifacts into {} unique functions",
            artifacts.len(),
            combined.len()
        );
        Ok(combined.len())
    }
}

fn read_json(path: &Path) -> Result<Value, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StoreError::MissingArtifact(path.to_path_buf()),
        _ => StoreError::io(path, e),
    })?;
    serde_json::from_str(&text).map_err(|e| StoreError::json(path, e))
}
