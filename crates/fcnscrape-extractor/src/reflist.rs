//! Reference-list JSON strategy

use crate::error::ExtractorError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReflistResponse {
    category: Option<Category>,
}

#[derive(Debug, Default, Deserialize)]
struct Category {
    #[serde(rename = "leaf-items", default)]
    leaf_items: Option<Vec<LeafItem>>,

    #[serde(rename = "grouped-leaf-items", default)]
    grouped_leaf_items: Option<Vec<Category>>,
}

#[derive(Debug, Deserialize)]
struct LeafItem {
    name: Option<String>,
}

impl Category {
    fn names(self) -> Vec<String> {
        match self.grouped_leaf_items {
            Some(groups) if !groups.is_empty() => groups
                .into_iter()
                .flat_map(|group| group.leaf_names())
                .collect(),
            _ => self.leaf_names(),
        }
    }

    fn leaf_names(self) -> Vec<String> {
        self.leaf_items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| item.name)
            .collect()
    }
}

/// Flatten a reference-list response into raw candidates
///
/// Grouped responses are flattened group by group in order. Items without a
/// `name` are skipped.
///
/// # Errors
/// Returns [`ExtractorError::JsonParse`] for malformed JSON and
/// [`ExtractorError::InvalidFormat`] when there is no `category` object.
pub fn parse_reflist(body: &str) -> Result<Vec<String>, ExtractorError> {
    let response: ReflistResponse = serde_json::from_str(body)?;
    let category = response
        .category
        .ok_or_else(|| ExtractorError::InvalidFormat("missing 'category'".to_string()))?;

    Ok(category.names())
}
