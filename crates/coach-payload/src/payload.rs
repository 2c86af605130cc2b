//! Payload composition and rendering.
//!
//! [`Payload::assemble`] reads the system prompt, the guidelines, and the
//! docs index, derives the policy excerpt, and [`Payload::render`] turns the
//! result into the pretty-printed JSON document consumed downstream.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::docs_index::DocsIndex;
use crate::excerpt::policy_excerpt;
use crate::sources::PayloadSources;

/// The JSON document handed to the coach.
///
/// Field order is the key order of the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Verbatim contents of the system prompt file.
    pub system: String,
    /// Policy section of the tutor guidelines.
    pub policy_excerpt: String,
    /// Documentation pages the coach may cite, in index order.
    pub allowed_docs: Vec<String>,
}

impl Payload {
    /// Build a payload from already-loaded inputs.
    pub fn from_parts(system: String, guidelines: &str, index: DocsIndex) -> Self {
        Self {
            system,
            policy_excerpt: policy_excerpt(guidelines),
            allowed_docs: index.allowed_docs,
        }
    }

    /// Load every source relative to `root` and compose the payload.
    ///
    /// Fails on the first missing or unreadable file, or on a malformed
    /// docs index.
    pub fn assemble(root: &Path, sources: &PayloadSources) -> Result<Self, String> {
        let paths = sources.resolve(root);

        let system = read_text(&paths.system_prompt, "system prompt")?;
        let guidelines = read_text(&paths.guidelines, "guidelines")?;
        let index = DocsIndex::load(&paths.docs_index)?;

        let payload = Self::from_parts(system, &guidelines, index);
        info!(
            "Assembled payload: excerpt {} chars, {} allowed docs",
            payload.policy_excerpt.chars().count(),
            payload.allowed_docs.len()
        );
        Ok(payload)
    }

    /// Render as JSON with two-space indentation. Non-ASCII text is emitted
    /// as-is.
    pub fn render(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("failed to serialize payload: {e}"))
    }
}

fn read_text(path: &Path, what: &str) -> Result<String, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {what} '{}': {e}", path.display()))?;
    debug!("Read {what} from {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
