//! Toolbox catalog module
//!
//! The URL cache for a release is a nested mapping:
//! `family → [group →] toolbox name → URL`. Depth varies across releases
//! (older manifests carry no family or group), so consumers flatten it with
//! [`ToolboxCatalog::denest`] and never depend on the nesting.

/// A node of the nested toolbox catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    /// Leaf: the documentation URL of one toolbox
    Url(String),

    /// Grouping level (product family or product group)
    Group(ToolboxCatalog),
}

/// Ordered, nested toolbox catalog
///
/// Keys keep insertion order; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolboxCatalog {
    entries: Vec<(String, CatalogNode)>,
}

impl ToolboxCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `key`, replacing any existing node with that key
    pub fn insert(&mut self, key: impl Into<String>, node: CatalogNode) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = node,
            None => self.entries.push((key, node)),
        }
    }

    /// Insert a toolbox URL below the given chain of group names, creating groups as needed
    pub fn insert_url(&mut self, groups: &[&str], toolbox: impl Into<String>, url: impl Into<String>) {
        let mut level = self;
        for group in groups {
            level = level.group_mut(group);
        }
        level.insert(toolbox, CatalogNode::Url(url.into()));
    }

    /// Get (or create) the child group named `key`
    fn group_mut(&mut self, key: &str) -> &mut ToolboxCatalog {
        let idx = match self.entries.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                if !matches!(self.entries[idx].1, CatalogNode::Group(_)) {
                    self.entries[idx].1 = CatalogNode::Group(ToolboxCatalog::new());
                }
                idx
            }
            None => {
                self.entries
                    .push((key.to_string(), CatalogNode::Group(ToolboxCatalog::new())));
                self.entries.len() - 1
            }
        };

        match &mut self.entries[idx].1 {
            CatalogNode::Group(group) => group,
            CatalogNode::Url(_) => unreachable!("entry was just made a group"),
        }
    }

    /// Top-level entries in insertion order
    pub fn entries(&self) -> &[(String, CatalogNode)] {
        &self.entries
    }

    /// Whether the catalog has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten every leaf into a toolbox → URL map, depth first in catalog order
    ///
    /// A toolbox name appearing in more than one group keeps its first
    /// position and the last URL seen.
    pub fn denest(&self) -> ToolboxUrlMap {
        let mut flat = ToolboxUrlMap::new();
        self.denest_into(&mut flat);
        flat
    }

    fn denest_into(&self, flat: &mut ToolboxUrlMap) {
        for (key, node) in &self.entries {
            match node {
                CatalogNode::Url(url) => flat.insert(key.clone(), url.clone()),
                CatalogNode::Group(group) => group.denest_into(flat),
            }
        }
    }
}

/// Flat toolbox display name → documentation URL map, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolboxUrlMap {
    entries: Vec<(String, String)>,
}

impl ToolboxUrlMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a toolbox, replacing the URL in place if the name already exists
    pub fn insert(&mut self, toolbox: String, url: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == toolbox) {
            Some((_, existing)) => *existing = url,
            None => self.entries.push((toolbox, url)),
        }
    }

    /// Look up a toolbox URL by display name
    pub fn get(&self, toolbox: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == toolbox)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(toolbox, url)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of toolboxes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ToolboxUrlMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = ToolboxUrlMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
