//! JSON encoding of store artifacts

use crate::error::StoreError;
use fcnscrape_domain::{CatalogNode, ToolboxCatalog};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Serialize `value` as tab-indented JSON with a trailing newline
pub(crate) fn to_tabbed_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Convert a catalog into a nested JSON object, keeping entry order
pub(crate) fn catalog_to_value(catalog: &ToolboxCatalog) -> Value {
    let mut map = Map::new();
    for (key, node) in catalog.entries() {
        let value = match node {
            CatalogNode::Url(url) => Value::String(url.clone()),
            CatalogNode::Group(group) => catalog_to_value(group),
        };
        map.insert(key.clone(), value);
    }
    Value::Object(map)
}

/// Rebuild a catalog from a nested JSON object of any depth
pub(crate) fn catalog_from_value(value: &Value) -> Result<ToolboxCatalog, StoreError> {
    let map = value
        .as_object()
        .ok_or_else(|| StoreError::InvalidData("URL cache must be a JSON object".to_string()))?;

    let mut catalog = ToolboxCatalog::new();
    for (key, value) in map {
        let node = match value {
            Value::String(url) => CatalogNode::Url(url.clone()),
            Value::Object(_) => CatalogNode::Group(catalog_from_value(value)?),
            other => {
                return Err(StoreError::InvalidData(format!(
                    "URL cache entry '{}' must be a URL or a group, found {}",
                    key,
                    json_kind(other)
                )))
            }
        };
        catalog.insert(key.clone(), node);
    }
    Ok(catalog)
}

/// Read a JSON value as a list of strings
pub(crate) fn string_list(value: Value, what: &str) -> Result<Vec<String>, StoreError> {
    let Value::Array(items) = value else {
        return Err(StoreError::InvalidData(format!(
            "{} must be a JSON list, found {}",
            what,
            json_kind(&value)
        )));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(StoreError::InvalidData(format!(
                "{} must contain only strings, found {}",
                what,
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
