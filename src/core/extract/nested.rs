use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::{Extract, display_path, identifier_for, read_text};
use crate::core::{
    data::{SourceDocument, SourceFormat, TranslatableString},
    error::SourceError,
};

/// A parsed JSON-like document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum NestedValue {
    /// Key/value pairs in insertion order.
    Mapping(Vec<(String, NestedValue)>),
    Sequence(Vec<NestedValue>),
    Scalar(Scalar),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl From<&Value> for NestedValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => NestedValue::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), NestedValue::from(v)))
                    .collect(),
            ),
            Value::Array(arr) => NestedValue::Sequence(arr.iter().map(NestedValue::from).collect()),
            Value::String(s) => NestedValue::Scalar(Scalar::Text(s.clone())),
            Value::Number(n) => NestedValue::Scalar(Scalar::Number(n.as_f64().unwrap_or_default())),
            Value::Bool(b) => NestedValue::Scalar(Scalar::Bool(*b)),
            Value::Null => NestedValue::Scalar(Scalar::Null),
        }
    }
}

impl NestedValue {
    /// Parse JSON text into a tree, keeping object key order.
    pub fn parse_json(content: &str) -> serde_json::Result<Self> {
        let json: Value = serde_json::from_str(content)?;
        Ok(NestedValue::from(&json))
    }

    /// Collect every text leaf, depth-first and pre-order.
    ///
    /// Mapping values are visited in insertion order and sequence elements in
    /// index order. Non-text scalars are skipped. Each string is keyed by its
    /// dotted path (`menu.items.0.label`).
    pub fn text_leaves(&self) -> Vec<TranslatableString> {
        let mut out = Vec::new();
        collect_leaves(self, String::new(), &mut out);
        out
    }
}

fn collect_leaves(value: &NestedValue, prefix: String, out: &mut Vec<TranslatableString>) {
    match value {
        NestedValue::Mapping(entries) => {
            for (key, val) in entries {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaves(val, new_prefix, out);
            }
        }
        NestedValue::Sequence(items) => {
            for (index, val) in items.iter().enumerate() {
                let new_prefix = if prefix.is_empty() {
                    index.to_string()
                } else {
                    format!("{}.{}", prefix, index)
                };
                collect_leaves(val, new_prefix, out);
            }
        }
        NestedValue::Scalar(Scalar::Text(s)) => {
            out.push(TranslatableString::keyed(s.clone(), prefix));
        }
        NestedValue::Scalar(_) => {}
    }
}

/// Extractor for JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedMapExtractor;

impl NestedMapExtractor {
    pub fn select(&self, tree: &NestedValue) -> Vec<TranslatableString> {
        tree.text_leaves()
    }
}

impl Extract for NestedMapExtractor {
    fn extract(&self, path: &Path) -> Result<SourceDocument, SourceError> {
        let content = read_text(path)?;
        let tree = NestedValue::parse_json(&content)
            .map_err(|e| SourceError::extraction(display_path(path), e))?;
        let strings = self.select(&tree);
        debug!(file = %path.display(), strings = strings.len(), "extracted JSON leaves");
        Ok(SourceDocument::new(
            identifier_for(path),
            SourceFormat::Json,
            strings,
        ))
    }
}
