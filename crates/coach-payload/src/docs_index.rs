//! The allowed-documentation index (`tools/docs_index.json`).

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

/// Documentation pages the coach may cite.
///
/// Only `allowed_docs` is read; other fields in the index file are ignored.
/// A missing `allowed_docs` field deserializes to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocsIndex {
    #[serde(default)]
    pub allowed_docs: Vec<String>,
}

impl DocsIndex {
    /// Parse an index from JSON text. The top level must be an object.
    pub fn parse(json: &str) -> Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| format!("invalid docs index JSON: {e}"))?;
        if !value.is_object() {
            return Err("docs index must be a JSON object".to_string());
        }
        serde_json::from_value(value).map_err(|e| format!("invalid docs index: {e}"))
    }

    /// Read and parse the index file at `path`.
    pub fn load(path: &Path) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read docs index '{}': {e}", path.display()))?;
        let index = Self::parse(&data)
            .map_err(|e| format!("failed to parse docs index '{}': {e}", path.display()))?;
        debug!(
            "Loaded docs index {} ({} allowed docs)",
            path.display(),
            index.allowed_docs.len()
        );
        Ok(index)
    }
}
